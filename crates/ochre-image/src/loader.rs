use std::sync::Arc;

use anyhow::Context;
use ochre_engine::logging::{Diagnostics, LogDiagnostics, Severity};

use crate::cache::{CachedImage, ImageCache, MemoryImageCache};
use crate::error::ImageLoadingError;
use crate::raster::RasterImage;
use crate::services::{RasterDecoder, SvgRenderer, UrlFetcher};
use crate::svg::SvgImage;
use crate::Image;

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Loader settings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Ask the writer to recompress bitmaps.
    pub optimize_images: bool,
}

/// Fetches, decodes and caches images by URL.
///
/// Failures never escape: they are reported to the diagnostics sink and
/// cached, so a broken URL is only tried once per cache.
pub struct ImageLoader {
    fetcher: Arc<dyn UrlFetcher>,
    decoder: Arc<dyn RasterDecoder>,
    svg_renderer: Arc<dyn SvgRenderer>,
    cache: Arc<dyn ImageCache>,
    diagnostics: Arc<dyn Diagnostics>,
    config: LoaderConfig,
}

impl ImageLoader {
    pub fn new(
        fetcher: Arc<dyn UrlFetcher>,
        decoder: Arc<dyn RasterDecoder>,
        svg_renderer: Arc<dyn SvgRenderer>,
    ) -> Self {
        Self {
            fetcher,
            decoder,
            svg_renderer,
            cache: Arc::new(MemoryImageCache::new()),
            diagnostics: Arc::new(LogDiagnostics),
            config: LoaderConfig::default(),
        }
    }

    /// Share a cache between loaders (one per document is typical).
    pub fn with_cache(mut self, cache: Arc<dyn ImageCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the image at `url`, or `None` if it cannot be loaded.
    ///
    /// `forced_mime_type` overrides the type reported by the fetcher.
    pub fn load(&self, url: &str, forced_mime_type: Option<&str>) -> CachedImage {
        self.cache.get_or_load(url, &mut || match self.fetch_image(url, forced_mime_type) {
            Ok(image) => Some(Arc::new(image)),
            Err(err) => {
                self.diagnostics.report(
                    Severity::Error,
                    &format!("Failed to load image at {url:?}: {err}"),
                    url,
                );
                None
            }
        })
    }

    fn fetch_image(&self, url: &str, forced_mime_type: Option<&str>) -> Result<Image, ImageLoadingError> {
        let resource = self.fetcher.fetch(url).with_context(|| format!("fetching {url}"))?;
        let mime_type = forced_mime_type.unwrap_or(&resource.mime_type);
        log::debug!("loading {url} as {mime_type}");

        if mime_type == SVG_MIME_TYPE {
            let image = SvgImage::new(
                &resource.bytes,
                url,
                self.svg_renderer.as_ref(),
                self.fetcher.clone(),
                self.diagnostics.clone(),
            )?;
            return Ok(Image::Svg(image));
        }

        if resource.bytes.is_empty() {
            return Err(ImageLoadingError::new(format!("empty {mime_type} resource")));
        }
        let raster = self.decoder.decode(&resource.bytes).with_context(|| format!("decoding {mime_type}"))?;
        Ok(Image::Raster(RasterImage::new(raster, self.config.optimize_images)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubDecoder, StubFetcher, StubSvgRenderer};
    use crate::IntrinsicSize;
    use ochre_engine::logging::MemoryDiagnostics;

    struct Fixture {
        fetcher: Arc<StubFetcher>,
        svg_renderer: Arc<StubSvgRenderer>,
        diagnostics: Arc<MemoryDiagnostics>,
        loader: ImageLoader,
    }

    fn fixture(fetcher: StubFetcher) -> Fixture {
        let fetcher = Arc::new(fetcher);
        let svg_renderer = Arc::new(StubSvgRenderer::default());
        let diagnostics = Arc::new(MemoryDiagnostics::new());
        let loader = ImageLoader::new(fetcher.clone(), Arc::new(StubDecoder), svg_renderer.clone())
            .with_diagnostics(diagnostics.clone())
            .with_config(LoaderConfig { optimize_images: true });
        Fixture { fetcher, svg_renderer, diagnostics, loader }
    }

    #[test]
    fn loads_raster_with_config() {
        let fx = fixture(StubFetcher::default().with("http://x/a.png", "image/png", "raster 4x2"));
        let image = fx.loader.load("http://x/a.png", None).unwrap();
        let Image::Raster(raster) = image.as_ref() else {
            panic!("expected a raster, got {image:?}");
        };
        assert_eq!(raster.intrinsic_size(1.0), IntrinsicSize { width: Some(4.0), height: Some(2.0) });
        assert!(fx.diagnostics.take().is_empty());
    }

    #[test]
    fn second_load_hits_cache() {
        let fx = fixture(StubFetcher::default().with("http://x/a.png", "image/png", "raster 4x2"));
        let first = fx.loader.load("http://x/a.png", None).unwrap();
        let second = fx.loader.load("http://x/a.png", None).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fx.fetcher.calls(), 1);
    }

    #[test]
    fn failure_is_reported_and_cached() {
        let fx = fixture(StubFetcher::default());
        assert!(fx.loader.load("http://x/missing.png", None).is_none());
        assert!(fx.loader.load("http://x/missing.png", None).is_none());
        assert_eq!(fx.fetcher.calls(), 1);

        let reports = fx.diagnostics.take();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
        assert_eq!(
            reports[0].message,
            "Failed to load image at \"http://x/missing.png\": fetching http://x/missing.png: 404 Not Found"
        );
        assert_eq!(reports[0].context, "http://x/missing.png");
    }

    #[test]
    fn svg_mime_routes_to_renderer() {
        let fx = fixture(StubFetcher::default().with("http://x/a.svg", SVG_MIME_TYPE, "svg width=10 height=5"));
        let image = fx.loader.load("http://x/a.svg", None).unwrap();
        assert!(matches!(image.as_ref(), Image::Svg(_)));
        assert_eq!(image.intrinsic_ratio(16.0), Some(2.0));
        assert_eq!(*fx.svg_renderer.bases.lock().unwrap(), vec![Some("http://x/a.svg".to_owned())]);
    }

    #[test]
    fn forced_mime_type_wins() {
        let fx = fixture(StubFetcher::default().with("http://x/icon", "text/plain", "svg width=10 height=10"));
        let image = fx.loader.load("http://x/icon", Some(SVG_MIME_TYPE)).unwrap();
        assert!(matches!(image.as_ref(), Image::Svg(_)));
    }

    #[test]
    fn svg_is_not_sniffed() {
        let fx = fixture(StubFetcher::default().with("http://x/a", "application/octet-stream", "svg width=10"));
        assert!(fx.loader.load("http://x/a", None).is_none());
        let reports = fx.diagnostics.take();
        assert!(reports[0].message.contains("unrecognized image format"), "{}", reports[0].message);
    }

    #[test]
    fn invalid_svg_is_reported() {
        let fx = fixture(StubFetcher::default().with("http://x/a.svg", SVG_MIME_TYPE, "<html>"));
        assert!(fx.loader.load("http://x/a.svg", None).is_none());
        let reports = fx.diagnostics.take();
        assert!(reports[0].message.ends_with("not an SVG document"), "{}", reports[0].message);
    }

    #[test]
    fn empty_raster_is_reported() {
        let fx = fixture(StubFetcher::default().with("http://x/a.png", "image/png", ""));
        assert!(fx.loader.load("http://x/a.png", None).is_none());
        assert!(fx.diagnostics.take()[0].message.ends_with("empty image/png resource"));
    }

    #[test]
    fn shared_cache_spans_loaders() {
        let cache = Arc::new(MemoryImageCache::new());
        let a = fixture(StubFetcher::default().with("u", "image/png", "raster 1x1"));
        let b = fixture(StubFetcher::default());
        let a_loader = a.loader.with_cache(cache.clone());
        let b_loader = b.loader.with_cache(cache.clone());
        assert!(a_loader.load("u", None).is_some());
        assert!(b_loader.load("u", None).is_some());
        assert_eq!(b.fetcher.calls(), 0);
        assert_eq!(cache.len(), 1);
    }
}
