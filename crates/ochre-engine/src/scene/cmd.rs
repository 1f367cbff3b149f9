use crate::coords::{ColorRgba, Rect};
use crate::shading::Shading;

use super::{ImageRendering, Transform};

/// Writer-agnostic draw command, one per [`super::DrawContext`] call.
///
/// Rasters are recorded by size only; pixels stay with the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, color: ColorRgba },
    PushState,
    PopState,
    Transform(Transform),
    Raster { width: u32, height: u32, rendering: ImageRendering, optimize: bool },
    Surface { width: u32, height: u32 },
    Shading(Shading),
}
