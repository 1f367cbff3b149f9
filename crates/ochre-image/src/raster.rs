use ochre_engine::coords::Size;
use ochre_engine::scene::{DrawContext, ImageRendering, Raster};

use crate::IntrinsicSize;

/// A decoded bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    raster: Raster,
    optimize: bool,
}

impl RasterImage {
    /// `optimize` is forwarded to the writer, which may recompress the pixels.
    pub fn new(raster: Raster, optimize: bool) -> Self {
        Self { raster, optimize }
    }

    /// Pixel size divided by `image_resolution` (dots per CSS pixel).
    pub fn intrinsic_size(&self, image_resolution: f32) -> IntrinsicSize {
        IntrinsicSize {
            width: Some(self.raster.width as f32 / image_resolution),
            height: Some(self.raster.height as f32 / image_resolution),
        }
    }

    /// Width over height; infinite for a zero-height bitmap.
    pub fn intrinsic_ratio(&self) -> f32 {
        if self.raster.height == 0 {
            f32::INFINITY
        } else {
            self.raster.width as f32 / self.raster.height as f32
        }
    }

    /// Draws the bitmap stretched over `size`.
    ///
    /// Raster space has its origin at the bottom-left, hence the flip.
    pub fn draw(&self, ctx: &mut dyn DrawContext, size: Size, rendering: ImageRendering) {
        if size.is_empty() || self.raster.is_empty() {
            return;
        }
        ctx.push_state();
        ctx.transform([size.width, 0.0, 0.0, -size.height, 0.0, size.height]);
        ctx.draw_raster(&self.raster, rendering, self.optimize);
        ctx.pop_state();
    }
}
