//! Ochre engine crate.
//!
//! Lays out CSS linear and radial gradients (including their repeating forms)
//! inside a box and turns the result into shading descriptions a document
//! writer can emit.
//!
//! ```
//! use ochre_engine::coords::{ColorRgba, Size};
//! use ochre_engine::layout::RenderPlan;
//! use ochre_engine::paint::{ColorStop, Gradient, LinearDirection};
//!
//! let gradient = Gradient::linear(
//!     LinearDirection::Angle(0.0),
//!     vec![ColorStop::auto(ColorRgba::black()), ColorStop::auto(ColorRgba::white())],
//! );
//! let RenderPlan::Linear { points, positions, .. } = gradient.layout(Size::new(100.0, 100.0)) else {
//!     unreachable!()
//! };
//! assert_eq!(points, [50.0, 100.0, 50.0, 0.0]);
//! assert_eq!(positions, vec![0.0, 1.0]);
//! ```

pub mod coords;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shading;
