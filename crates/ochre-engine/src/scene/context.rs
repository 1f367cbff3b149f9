use std::sync::Arc;

use crate::coords::{ColorRgba, Rect};
use crate::shading::Shading;

/// Affine matrix `(a, b, c, d, e, f)` mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
pub type Transform = [f32; 6];

/// Resampling hint for raster images (CSS `image-rendering`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ImageRendering {
    #[default]
    Auto,
    CrispEdges,
    Pixelated,
}

/// Decoded pixels, produced by an image decoder or an SVG renderer.
///
/// `pixels` is opaque to the engine; its layout is agreed between the decoder
/// and the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<[u8]>,
}

impl Raster {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Output surface implemented by a document writer.
///
/// Coordinates are relative to the box being painted, top-left at `(0, 0)`.
pub trait DrawContext {
    /// Fills `rect` with a flat color.
    fn fill_rect(&mut self, rect: Rect, color: ColorRgba);

    /// Saves the graphics state (transform included).
    fn push_state(&mut self);

    /// Restores the state saved by the matching [`push_state`](Self::push_state).
    fn pop_state(&mut self);

    /// Concatenates `matrix` to the current transform.
    fn transform(&mut self, matrix: Transform);

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform([sx, 0.0, 0.0, sy, 0.0, 0.0]);
    }

    /// Draws a raster into the unit square of the current transform.
    fn draw_raster(&mut self, raster: &Raster, rendering: ImageRendering, optimize: bool);

    /// Paints a pre-rendered surface at the origin, in its own pixel units.
    fn paint_surface(&mut self, surface: &Raster);

    /// Paints a shading over the current clip.
    fn draw_shading(&mut self, shading: &Shading);
}
