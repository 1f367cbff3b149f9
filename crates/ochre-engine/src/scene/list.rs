use crate::coords::{ColorRgba, Rect};
use crate::shading::Shading;

use super::{DrawCmd, DrawContext, ImageRendering, Raster, Transform};

/// Recorded draw stream.
///
/// Implements [`DrawContext`] by appending one [`DrawCmd`] per call, in call
/// order. Useful for tests and for writers that want to post-process a box
/// before emitting it.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    /// Open `push_state` calls not yet matched by `pop_state`.
    depth: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.depth = 0;
    }

    /// Returns items in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every saved state has been restored.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl DrawContext for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: ColorRgba) {
        self.items.push(DrawCmd::FillRect { rect, color });
    }

    fn push_state(&mut self) {
        self.depth += 1;
        self.items.push(DrawCmd::PushState);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_state`.
    fn pop_state(&mut self) {
        debug_assert!(self.depth > 0, "pop_state called without matching push_state");
        self.depth = self.depth.saturating_sub(1);
        self.items.push(DrawCmd::PopState);
    }

    fn transform(&mut self, matrix: Transform) {
        self.items.push(DrawCmd::Transform(matrix));
    }

    fn draw_raster(&mut self, raster: &Raster, rendering: ImageRendering, optimize: bool) {
        self.items.push(DrawCmd::Raster {
            width: raster.width,
            height: raster.height,
            rendering,
            optimize,
        });
    }

    fn paint_surface(&mut self, surface: &Raster) {
        self.items.push(DrawCmd::Surface { width: surface.width, height: surface.height });
    }

    fn draw_shading(&mut self, shading: &Shading) {
        self.items.push(DrawCmd::Shading(shading.clone()));
    }
}
