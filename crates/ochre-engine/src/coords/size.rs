/// Size of a gradient box in device units.
///
/// Layout requires both dimensions to be non-negative; zero is a valid
/// (degenerate) size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and `>= 0`.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width >= 0.0 && self.height >= 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Length of the box diagonal.
    #[inline]
    pub fn diagonal(self) -> f32 {
        self.width.hypot(self.height)
    }
}
