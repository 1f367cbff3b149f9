use crate::coords::{ColorRgba, Size, Vec2};

/// A length in device units or a percentage of some reference length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LengthPercentage {
    Length(f32),
    /// Percentage in CSS units (`50.0` is half of the reference).
    Percentage(f32),
}

impl LengthPercentage {
    #[inline]
    pub const fn px(v: f32) -> Self {
        Self::Length(v)
    }

    #[inline]
    pub const fn percent(v: f32) -> Self {
        Self::Percentage(v)
    }

    /// Resolves against `reference` (the gradient vector length, or a box side).
    #[inline]
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Self::Length(v) => v,
            Self::Percentage(p) => p / 100.0 * reference,
        }
    }
}

/// A single gradient stop.
///
/// `position = None` lets the layout place the stop: the first unset stop goes
/// to the start of the axis, the last to its end, and the rest are spread
/// evenly between their set neighbours.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub color: ColorRgba,
    pub position: Option<LengthPercentage>,
}

impl ColorStop {
    #[inline]
    pub const fn new(color: ColorRgba, position: Option<LengthPercentage>) -> Self {
        Self { color, position }
    }

    /// Stop with an unspecified position.
    #[inline]
    pub const fn auto(color: ColorRgba) -> Self {
        Self::new(color, None)
    }

    #[inline]
    pub const fn at_px(color: ColorRgba, px: f32) -> Self {
        Self::new(color, Some(LengthPercentage::Length(px)))
    }

    #[inline]
    pub const fn at_percent(color: ColorRgba, percent: f32) -> Self {
        Self::new(color, Some(LengthPercentage::Percentage(percent)))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HorizontalSide {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Direction of a linear gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LinearDirection {
    /// `to <vertical> <horizontal>`: the gradient line is perpendicular to the
    /// box diagonal that does not touch the named corner.
    Corner { vertical: VerticalSide, horizontal: HorizontalSide },
    /// Angle in radians, `0` pointing up and increasing clockwise.
    Angle(f32),
}

impl LinearDirection {
    /// `to bottom`, the CSS default.
    #[inline]
    pub const fn to_bottom() -> Self {
        Self::Angle(core::f32::consts::PI)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RadialShape {
    Circle,
    Ellipse,
}

/// Keyword sizing of a radial ending shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SizeExtent {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
}

impl SizeExtent {
    #[inline]
    pub fn is_closest(self) -> bool {
        matches!(self, Self::ClosestSide | Self::ClosestCorner)
    }

    #[inline]
    pub fn is_side(self) -> bool {
        matches!(self, Self::ClosestSide | Self::FarthestSide)
    }
}

/// Size of a radial ending shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RadialSize {
    Extent(SizeExtent),
    /// Radii; percentages resolve against the box width and height respectively.
    Explicit { x: LengthPercentage, y: LengthPercentage },
}

/// Center of a radial gradient, as an offset from a box edge on each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialCenter {
    pub origin_x: HorizontalSide,
    pub x: LengthPercentage,
    pub origin_y: VerticalSide,
    pub y: LengthPercentage,
}

impl RadialCenter {
    /// Offsets from the top-left corner.
    #[inline]
    pub const fn top_left(x: LengthPercentage, y: LengthPercentage) -> Self {
        Self { origin_x: HorizontalSide::Left, x, origin_y: VerticalSide::Top, y }
    }

    /// Resolves the center inside a box. `right`/`bottom` origins mirror the offset.
    pub fn resolve(self, size: Size) -> Vec2 {
        let mut x = self.x.resolve(size.width);
        let mut y = self.y.resolve(size.height);
        if self.origin_x == HorizontalSide::Right {
            x = size.width - x;
        }
        if self.origin_y == VerticalSide::Bottom {
            y = size.height - y;
        }
        Vec2::new(x, y)
    }
}

impl Default for RadialCenter {
    fn default() -> Self {
        Self::top_left(LengthPercentage::percent(50.0), LengthPercentage::percent(50.0))
    }
}

/// Type-specific parameters of a gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientKind {
    Linear { direction: LinearDirection },
    Radial { shape: RadialShape, size: RadialSize, center: RadialCenter },
}

/// CSS gradient image: an ordered, non-empty list of color stops plus
/// type-specific geometry.
///
/// Layout into concrete geometry happens in [`crate::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
    kind: GradientKind,
    repeating: bool,
}

impl Gradient {
    /// # Panics
    /// Panics if `stops` is empty.
    pub fn new(kind: GradientKind, stops: Vec<ColorStop>, repeating: bool) -> Self {
        assert!(!stops.is_empty(), "a gradient needs at least one color stop");
        Self { stops, kind, repeating }
    }

    /// Non-repeating linear gradient.
    pub fn linear(direction: LinearDirection, stops: Vec<ColorStop>) -> Self {
        Self::new(GradientKind::Linear { direction }, stops, false)
    }

    /// Non-repeating radial gradient.
    pub fn radial(
        shape: RadialShape,
        size: RadialSize,
        center: RadialCenter,
        stops: Vec<ColorStop>,
    ) -> Self {
        Self::new(GradientKind::Radial { shape, size, center }, stops, false)
    }

    /// Turns this gradient into its `repeating-*` counterpart.
    #[must_use]
    pub fn repeating(mut self) -> Self {
        self.repeating = true;
        self
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn kind(&self) -> &GradientKind {
        &self.kind
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }
}
