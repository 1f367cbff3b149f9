//! CSS `<image>` values for the ochre engine.
//!
//! [`Image`] is a closed set of bitmaps, SVG documents and gradients that all
//! report intrinsic dimensions and draw into an
//! [`ochre_engine::scene::DrawContext`]. [`ImageLoader`] turns URLs into
//! images through injected collaborators ([`UrlFetcher`], [`RasterDecoder`],
//! [`SvgRenderer`]) and caches the outcome, failures included.

pub mod cache;
pub mod error;
pub mod image;
pub mod loader;
pub mod raster;
pub mod services;
pub mod svg;

#[cfg(test)]
mod testing;

pub use cache::{CachedImage, ImageCache, MemoryImageCache};
pub use error::ImageLoadingError;
pub use image::{Image, IntrinsicSize};
pub use loader::{ImageLoader, LoaderConfig, SVG_MIME_TYPE};
pub use raster::RasterImage;
pub use services::{FetchedResource, RasterDecoder, SvgMetrics, SvgRenderer, SvgTree, UrlFetcher};
pub use svg::SvgImage;
