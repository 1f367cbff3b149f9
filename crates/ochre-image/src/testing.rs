//! In-memory collaborators for tests.
//!
//! Documents are plain text: `raster <w>x<h>` for bitmaps, and
//! `svg [width=..] [height=..] [viewbox=a,b,c,d] [render=<w>x<h>|fail]` for
//! vector images.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Context};
use ochre_engine::scene::Raster;

use crate::services::{FetchedResource, RasterDecoder, SvgMetrics, SvgRenderer, SvgTree, UrlFetcher};

#[derive(Default)]
pub struct StubFetcher {
    resources: HashMap<String, FetchedResource>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn with(mut self, url: &str, mime_type: &str, body: &str) -> Self {
        let resource = FetchedResource { bytes: body.as_bytes().to_vec(), mime_type: mime_type.to_owned() };
        self.resources.insert(url.to_owned(), resource);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UrlFetcher for StubFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<FetchedResource> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.resources.get(url).cloned().ok_or_else(|| anyhow!("404 Not Found"))
    }
}

fn parse_dims(text: &str) -> anyhow::Result<(u32, u32)> {
    let (w, h) = text.split_once('x').context("expected <w>x<h>")?;
    Ok((w.parse()?, h.parse()?))
}

fn raster(width: u32, height: u32) -> Raster {
    Raster { width, height, pixels: vec![0; (width * height * 4) as usize].into() }
}

#[derive(Default)]
pub struct StubDecoder;

impl RasterDecoder for StubDecoder {
    fn decode(&self, bytes: &[u8]) -> anyhow::Result<Raster> {
        let text = std::str::from_utf8(bytes)?;
        let Some(dims) = text.strip_prefix("raster ") else {
            bail!("unrecognized image format");
        };
        let (width, height) = parse_dims(dims)?;
        Ok(raster(width, height))
    }
}

#[derive(Default)]
pub struct StubSvgRenderer {
    /// Base URLs passed to `parse`, in call order.
    pub bases: Mutex<Vec<Option<String>>>,
}

struct StubTree {
    metrics: SvgMetrics,
    render: Option<(u32, u32)>,
}

impl SvgRenderer for StubSvgRenderer {
    fn parse(
        &self,
        bytes: &[u8],
        base_url: Option<&str>,
        _fetcher: Arc<dyn UrlFetcher>,
    ) -> anyhow::Result<Box<dyn SvgTree>> {
        if let Ok(mut bases) = self.bases.lock() {
            bases.push(base_url.map(str::to_owned));
        }
        let text = std::str::from_utf8(bytes)?;
        let mut words = text.split_whitespace();
        if words.next() != Some("svg") {
            bail!("not an SVG document");
        }
        let mut tree = StubTree { metrics: SvgMetrics::default(), render: Some((10, 10)) };
        for word in words {
            let (key, value) = word.split_once('=').context("expected key=value")?;
            match key {
                "width" => tree.metrics.width = Some(value.parse()?),
                "height" => tree.metrics.height = Some(value.parse()?),
                "viewbox" => {
                    let parts = value.split(',').map(str::parse).collect::<Result<Vec<f32>, _>>()?;
                    let view_box: [f32; 4] = parts.try_into().map_err(|_| anyhow!("viewbox needs 4 numbers"))?;
                    tree.metrics.view_box = Some(view_box);
                }
                "render" if value == "fail" => tree.render = None,
                "render" => tree.render = Some(parse_dims(value)?),
                other => bail!("unknown attribute {other}"),
            }
        }
        Ok(Box::new(tree))
    }
}

impl SvgTree for StubTree {
    fn measure(&self, _font_size: f32) -> SvgMetrics {
        self.metrics
    }

    fn render(&self, _width: f32, _height: f32) -> anyhow::Result<Raster> {
        let (width, height) = self.render.context("renderer crashed")?;
        Ok(raster(width, height))
    }
}
