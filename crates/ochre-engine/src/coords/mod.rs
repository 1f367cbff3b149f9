//! Coordinate and geometry types shared by the gradient engine and drawing code.
//!
//! Canonical space:
//! - Device units (CSS px for layout callers)
//! - Origin top-left of the gradient box
//! - +X right, +Y down

mod color;
mod rect;
mod size;
mod vec2;

pub use color::ColorRgba;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
