use ochre_engine::coords::Size;
use ochre_engine::paint::Gradient;
use ochre_engine::scene::{DrawContext, ImageRendering};

use crate::raster::RasterImage;
use crate::svg::SvgImage;

/// Intrinsic dimensions in CSS pixels; `None` when the image has none.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Anything that can fill a box as a CSS `<image>`.
#[derive(Debug)]
pub enum Image {
    Raster(RasterImage),
    Svg(SvgImage),
    Gradient(Gradient),
}

impl Image {
    pub fn intrinsic_size(&self, image_resolution: f32, font_size: f32) -> IntrinsicSize {
        match self {
            Self::Raster(image) => image.intrinsic_size(image_resolution),
            Self::Svg(image) => image.intrinsic(font_size).0,
            Self::Gradient(_) => IntrinsicSize::default(),
        }
    }

    /// Width over height, when the image defines one.
    pub fn intrinsic_ratio(&self, font_size: f32) -> Option<f32> {
        match self {
            Self::Raster(image) => Some(image.intrinsic_ratio()),
            Self::Svg(image) => image.intrinsic(font_size).1,
            Self::Gradient(_) => None,
        }
    }

    /// Paints the image over a box of `size` at the origin.
    ///
    /// `rendering` only affects bitmaps.
    pub fn draw(&self, ctx: &mut dyn DrawContext, size: Size, rendering: ImageRendering) {
        match self {
            Self::Raster(image) => image.draw(ctx, size, rendering),
            Self::Svg(image) => image.draw(ctx, size),
            Self::Gradient(gradient) => gradient.draw(ctx, size),
        }
    }
}

impl From<Gradient> for Image {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}
