//! Paint model shared between gradient layout and drawing.
//!
//! Scope:
//! - color representation (straight for stops, premultiplied for blending)
//! - gradient descriptors (linear, radial, repeating)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{
    ColorStop, Gradient, GradientKind, HorizontalSide, LengthPercentage, LinearDirection,
    RadialCenter, RadialShape, RadialSize, SizeExtent, VerticalSide,
};
