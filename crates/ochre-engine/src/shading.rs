//! Shading descriptions handed to the document writer.
//!
//! A non-solid [`RenderPlan`] becomes one shading: axial (type 2) for linear
//! gradients, radial (type 3) for radial ones, colored by a stitching function
//! (type 3) made of one exponential interpolation (type 2, `N = 1`) per pair
//! of adjacent stops. Only RGB is carried; stop alpha is not represented.

use crate::coords::ColorRgba;
use crate::layout::RenderPlan;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShadingKind {
    Axial,
    Radial,
}

impl ShadingKind {
    /// Numeric shading type of the output format.
    #[inline]
    pub fn shading_type(self) -> u8 {
        match self {
            Self::Axial => 2,
            Self::Radial => 3,
        }
    }
}

/// Interpolates between `c0` and `c1` over `domain`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialFunction {
    pub domain: [f32; 2],
    pub c0: [f32; 3],
    pub c1: [f32; 3],
    pub exponent: f32,
}

impl ExponentialFunction {
    pub const FUNCTION_TYPE: u8 = 2;

    /// Linear interpolation between two colors over `[0, 1]`.
    pub fn linear(from: ColorRgba, to: ColorRgba) -> Self {
        Self { domain: [0.0, 1.0], c0: from.rgb_array(), c1: to.rgb_array(), exponent: 1.0 }
    }
}

/// Piecewise combination of sub-functions split at `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchingFunction {
    pub domain: [f32; 2],
    pub encode: Vec<f32>,
    pub bounds: Vec<f32>,
    pub functions: Vec<ExponentialFunction>,
}

impl StitchingFunction {
    pub const FUNCTION_TYPE: u8 = 3;
}

/// Everything a writer needs to emit one shading object.
#[derive(Debug, Clone, PartialEq)]
pub struct Shading {
    pub kind: ShadingKind,
    /// `(x0, y0, x1, y1)` for axial, `(cx0, cy0, r0, cx1, cy1, r1)` for radial.
    pub coords: Vec<f32>,
    pub domain: [f32; 2],
    pub function: StitchingFunction,
    /// Extend past both ends of the domain; only non-repeating gradients do.
    pub extend: [bool; 2],
}

impl Shading {
    /// Builds the shading for a plan, or `None` for solid plans.
    pub fn from_plan(plan: &RenderPlan, repeating: bool) -> Option<Self> {
        let (kind, coords, positions, colors) = match plan {
            RenderPlan::Solid { .. } => return None,
            RenderPlan::Linear { points, positions, colors } => {
                (ShadingKind::Axial, points.to_vec(), positions, colors)
            }
            RenderPlan::Radial { points, positions, colors, .. } => {
                (ShadingKind::Radial, points.to_vec(), positions, colors)
            }
        };

        let domain = [positions[0], positions[positions.len() - 1]];
        let functions: Vec<ExponentialFunction> = colors
            .windows(2)
            .map(|pair| ExponentialFunction::linear(pair[0], pair[1]))
            .collect();
        let function = StitchingFunction {
            domain,
            encode: [0.0, 1.0].repeat(functions.len()),
            bounds: positions[1..positions.len() - 1].to_vec(),
            functions,
        };

        Some(Self { kind, coords, domain, function, extend: [!repeating; 2] })
    }
}
