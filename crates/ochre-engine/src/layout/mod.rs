//! Gradient layout: turns a [`Gradient`] and a box size into a [`RenderPlan`].
//!
//! Responsibilities:
//! - place color stops on the gradient vector (`stops`)
//! - compute linear axes and radial circles (`linear`, `radial`)
//! - tile repeating radial gradients out to the box corners and in to the center (`repeat`)
//!
//! Everything here is pure: the same inputs always produce the same plan.

pub mod linear;
pub mod radial;
pub mod repeat;
pub mod stops;

pub use linear::layout_linear;
pub use radial::layout_radial;
pub use repeat::{Circles, MAX_REPEATS};
pub use stops::{average_color, interpolate_color, normalize_stop_positions, resolve_stop_positions};

use crate::coords::{ColorRgba, Size};
use crate::paint::{Gradient, GradientKind};

/// Resolved geometry and colors of a gradient, ready for a document writer.
///
/// Non-solid plans always carry at least two positions, one per color.
/// Linear and non-repeating radial positions run from exactly `0` to exactly
/// `1`; repeating radial plans span whole tiled periods and the domain
/// `[positions[0], positions[last]]` maps linearly onto the two radii.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// Fill the whole box with one color.
    Solid { color: ColorRgba },
    /// Axial shading from `(x0, y0)` to `(x1, y1)`.
    Linear { points: [f32; 4], positions: Vec<f32>, colors: Vec<ColorRgba> },
    /// Radial shading between circles `(cx0, cy0, r0)` and `(cx1, cy1, r1)`,
    /// drawn in a space scaled vertically by `vertical_scale`.
    Radial {
        vertical_scale: f32,
        points: [f32; 6],
        positions: Vec<f32>,
        colors: Vec<ColorRgba>,
    },
}

impl RenderPlan {
    /// Vertical scale to apply before drawing; `1` except for elliptical radials.
    #[inline]
    pub fn vertical_scale(&self) -> f32 {
        match self {
            Self::Radial { vertical_scale, .. } => *vertical_scale,
            Self::Solid { .. } | Self::Linear { .. } => 1.0,
        }
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid { .. })
    }

    /// Stop positions; empty for solid plans.
    pub fn positions(&self) -> &[f32] {
        match self {
            Self::Solid { .. } => &[],
            Self::Linear { positions, .. } | Self::Radial { positions, .. } => positions,
        }
    }

    /// Stop colors; a single color for solid plans.
    pub fn colors(&self) -> &[ColorRgba] {
        match self {
            Self::Solid { color } => core::slice::from_ref(color),
            Self::Linear { colors, .. } | Self::Radial { colors, .. } => colors,
        }
    }
}

impl Gradient {
    /// Lays the gradient out in a box of `size`, top-left at `(0, 0)`.
    ///
    /// # Panics
    /// Panics if either dimension is negative or not finite.
    pub fn layout(&self, size: Size) -> RenderPlan {
        assert!(size.is_valid(), "gradient box must be finite and non-negative: {size:?}");
        match *self.kind() {
            GradientKind::Linear { direction } => {
                layout_linear(size, direction, self.stops(), self.is_repeating())
            }
            GradientKind::Radial { shape, size: ending, center } => {
                layout_radial(size, shape, ending, center, self.stops(), self.is_repeating())
            }
        }
    }
}

/// Copies stops, adding boundary stops so that zero-width end segments remain
/// visible: the output format does not extend colors past the shading domain.
///
/// `leading` is the position of a copy of the first color to prepend, if any.
/// A copy of the last color is appended one unit further out when the last two
/// positions coincide.
pub(crate) fn pad_stops(
    positions: &[f32],
    colors: &[ColorRgba],
    leading: Option<f32>,
) -> (Vec<f32>, Vec<ColorRgba>) {
    let n = positions.len();
    let mut out_positions = Vec::with_capacity(n + 2);
    let mut out_colors = Vec::with_capacity(n + 2);

    if let Some(at) = leading {
        out_positions.push(at);
        out_colors.push(colors[0]);
    }
    out_positions.extend_from_slice(positions);
    out_colors.extend_from_slice(colors);
    if positions[n - 2] == positions[n - 1] {
        out_positions.push(positions[n - 1] + 1.0);
        out_colors.push(colors[n - 1]);
    }
    (out_positions, out_colors)
}
