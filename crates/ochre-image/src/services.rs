//! Collaborators the image layer relies on but does not implement: fetching,
//! raster decoding and SVG rendering.
//!
//! All of them report failures as `anyhow::Error`; the loader turns those into
//! diagnostics and never propagates them.

use std::sync::Arc;

use ochre_engine::scene::Raster;

/// Bytes of a fetched resource and the MIME type it was served with.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedResource {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Resolves a URL to its content.
pub trait UrlFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> anyhow::Result<FetchedResource>;
}

/// Turns encoded raster bytes (PNG, JPEG, ...) into pixels.
pub trait RasterDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> anyhow::Result<Raster>;
}

/// Size information declared on an SVG root element.
///
/// Percentage and missing sizes are reported as `None` or `Some(0.0)`; neither
/// gives an intrinsic dimension.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SvgMetrics {
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// `(min_x, min_y, width, height)`.
    pub view_box: Option<[f32; 4]>,
}

/// A parsed SVG document.
pub trait SvgTree: Send + Sync {
    /// Root element sizes, with font-relative units resolved against `font_size`.
    fn measure(&self, font_size: f32) -> SvgMetrics;

    /// Renders the document for a `width` × `height` box.
    ///
    /// The returned surface may differ in size from the box; callers scale it.
    fn render(&self, width: f32, height: f32) -> anyhow::Result<Raster>;
}

/// Parses SVG documents. Nested resources are fetched through `fetcher`
/// relative to `base_url`.
pub trait SvgRenderer: Send + Sync {
    fn parse(
        &self,
        bytes: &[u8],
        base_url: Option<&str>,
        fetcher: Arc<dyn UrlFetcher>,
    ) -> anyhow::Result<Box<dyn SvgTree>>;
}
