use crate::coords::{Rect, Size};
use crate::layout::RenderPlan;
use crate::paint::Gradient;
use crate::shading::Shading;

use super::DrawContext;

impl Gradient {
    /// Paints the gradient over a box of `size`.
    ///
    /// Solid plans fill the box; other plans apply the plan's vertical scale
    /// and paint one shading.
    pub fn draw(&self, ctx: &mut dyn DrawContext, size: Size) {
        let plan = self.layout(size);
        if let RenderPlan::Solid { color } = plan {
            ctx.fill_rect(Rect::from_size(size), color);
            return;
        }
        let Some(shading) = Shading::from_plan(&plan, self.is_repeating()) else {
            return;
        };
        ctx.transform([1.0, 0.0, 0.0, plan.vertical_scale(), 0.0, 0.0]);
        ctx.draw_shading(&shading);
    }
}
