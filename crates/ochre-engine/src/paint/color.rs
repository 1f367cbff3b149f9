use core::ops::{Add, Mul};

use crate::coords::ColorRgba;

/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a`.
///
/// Used as the accumulation space when colors are averaged or interpolated so
/// that transparent stops do not bleed their (meaningless) color channels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from a straight-alpha color.
    #[inline]
    pub fn from_straight(c: ColorRgba) -> Self {
        Self { r: c.r * c.a, g: c.g * c.a, b: c.b * c.a, a: c.a }
    }

    /// Returns the straight-alpha representation.
    ///
    /// For `a == 0`, the result is fully transparent black.
    #[inline]
    pub fn to_straight(self) -> ColorRgba {
        if self.a == 0.0 {
            ColorRgba::transparent()
        } else {
            ColorRgba::new(self.r / self.a, self.g / self.a, self.b / self.a, self.a)
        }
    }
}

impl Add for Color {
    type Output = Color;
    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::from_premul(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::from_premul(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
