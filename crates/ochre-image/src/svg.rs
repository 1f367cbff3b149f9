use std::fmt;
use std::sync::Arc;

use ochre_engine::coords::Size;
use ochre_engine::logging::{Diagnostics, Severity};
use ochre_engine::scene::DrawContext;

use crate::error::ImageLoadingError;
use crate::services::{SvgRenderer, SvgTree, UrlFetcher};
use crate::IntrinsicSize;

/// A parsed SVG document, rendered lazily at draw time.
pub struct SvgImage {
    tree: Box<dyn SvgTree>,
    base_url: Option<String>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl SvgImage {
    /// Parses `bytes` fetched from `url`.
    ///
    /// `data:` URLs are not usable as a base for nested resources, so the
    /// renderer gets no base in that case.
    pub fn new(
        bytes: &[u8],
        url: &str,
        renderer: &dyn SvgRenderer,
        fetcher: Arc<dyn UrlFetcher>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, ImageLoadingError> {
        let base_url = (!is_data_url(url)).then(|| url.to_owned());
        let tree = renderer.parse(bytes, base_url.as_deref(), fetcher)?;
        Ok(Self { tree, base_url, diagnostics })
    }

    /// Intrinsic width and height, plus the ratio they imply.
    ///
    /// A missing dimension is recovered from the other one through the
    /// viewBox ratio.
    pub fn intrinsic(&self, font_size: f32) -> (IntrinsicSize, Option<f32>) {
        let metrics = self.tree.measure(font_size);
        let width = metrics.width.filter(|w| *w != 0.0);
        let height = metrics.height.filter(|h| *h != 0.0);
        let mut size = IntrinsicSize { width, height };

        let ratio = match (width, height, metrics.view_box) {
            (Some(w), Some(h), _) => Some(w / h),
            (_, _, Some([_, _, vb_width, vb_height])) if vb_width != 0.0 && vb_height != 0.0 => {
                let ratio = vb_width / vb_height;
                if let Some(w) = width {
                    size.height = Some(w / ratio);
                } else if let Some(h) = height {
                    size.width = Some(h * ratio);
                }
                Some(ratio)
            }
            _ => None,
        };
        (size, ratio)
    }

    /// Renders the document for `size` and paints it, scaled to fit.
    ///
    /// A render failure is reported and leaves the box unpainted.
    pub fn draw(&self, ctx: &mut dyn DrawContext, size: Size) {
        match self.tree.render(size.width, size.height) {
            Ok(surface) if !surface.is_empty() => {
                ctx.scale(size.width / surface.width as f32, size.height / surface.height as f32);
                ctx.paint_surface(&surface);
            }
            Ok(_) => {}
            Err(err) => self.diagnostics.report(
                Severity::Error,
                &format!("Failed to draw an SVG image: {err:#}"),
                self.base_url.as_deref().unwrap_or("<data>"),
            ),
        }
    }
}

impl fmt::Debug for SvgImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgImage").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

fn is_data_url(url: &str) -> bool {
    url.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubFetcher, StubSvgRenderer};
    use ochre_engine::logging::MemoryDiagnostics;
    use ochre_engine::scene::{DrawCmd, DrawList};

    fn svg(source: &str, url: &str) -> (SvgImage, Arc<MemoryDiagnostics>) {
        let diagnostics = Arc::new(MemoryDiagnostics::new());
        let image = SvgImage::new(
            source.as_bytes(),
            url,
            &StubSvgRenderer::default(),
            Arc::new(StubFetcher::default()),
            diagnostics.clone(),
        )
        .unwrap();
        (image, diagnostics)
    }

    #[test]
    fn explicit_size_defines_ratio() {
        let (image, _) = svg("svg width=200 height=100 viewbox=0,0,10,10", "http://x/a.svg");
        let (size, ratio) = image.intrinsic(16.0);
        assert_eq!(size, IntrinsicSize { width: Some(200.0), height: Some(100.0) });
        assert_eq!(ratio, Some(2.0));
    }

    #[test]
    fn view_box_fills_in_missing_height() {
        let (image, _) = svg("svg width=100 viewbox=0,0,40,20", "http://x/a.svg");
        let (size, ratio) = image.intrinsic(16.0);
        assert_eq!(size, IntrinsicSize { width: Some(100.0), height: Some(50.0) });
        assert_eq!(ratio, Some(2.0));
    }

    #[test]
    fn view_box_fills_in_missing_width() {
        let (image, _) = svg("svg height=30 viewbox=0,0,40,20", "http://x/a.svg");
        let (size, _) = image.intrinsic(16.0);
        assert_eq!(size, IntrinsicSize { width: Some(60.0), height: Some(30.0) });
    }

    #[test]
    fn view_box_alone_gives_ratio_only() {
        let (image, _) = svg("svg viewbox=0,0,40,20", "http://x/a.svg");
        assert_eq!(image.intrinsic(16.0), (IntrinsicSize::default(), Some(2.0)));
    }

    #[test]
    fn zero_sizes_are_not_intrinsic() {
        let (image, _) = svg("svg width=0 height=50", "http://x/a.svg");
        let (size, ratio) = image.intrinsic(16.0);
        assert_eq!(size, IntrinsicSize { width: None, height: Some(50.0) });
        assert_eq!(ratio, None);
    }

    #[test]
    fn data_url_has_no_base() {
        let (image, _) = svg("svg", "DATA:image/svg+xml,<svg/>");
        assert_eq!(image.base_url, None);
        let (image, _) = svg("svg", "http://x/a.svg");
        assert_eq!(image.base_url.as_deref(), Some("http://x/a.svg"));
    }

    #[test]
    fn draw_scales_rendered_surface() {
        let (image, _) = svg("svg render=50x25", "http://x/a.svg");
        let mut list = DrawList::new();
        image.draw(&mut list, Size::new(100.0, 100.0));
        assert_eq!(
            list.items(),
            &[
                DrawCmd::Transform([2.0, 0.0, 0.0, 4.0, 0.0, 0.0]),
                DrawCmd::Surface { width: 50, height: 25 },
            ]
        );
    }

    #[test]
    fn render_failure_is_reported() {
        let (image, diagnostics) = svg("svg render=fail", "http://x/a.svg");
        let mut list = DrawList::new();
        image.draw(&mut list, Size::new(10.0, 10.0));
        assert!(list.is_empty());
        let reports = diagnostics.take();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
        assert!(reports[0].message.starts_with("Failed to draw an SVG image"));
        assert_eq!(reports[0].context, "http://x/a.svg");
    }
}
