use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::Image;

/// Result of a load: `None` records a failure so it is not retried.
pub type CachedImage = Option<Arc<Image>>;

/// Per-document image store, keyed by URL.
pub trait ImageCache: Send + Sync {
    /// `None` on a miss; `Some(None)` for a remembered failure.
    fn get(&self, url: &str) -> Option<CachedImage>;

    fn put(&self, url: &str, image: CachedImage);

    /// Returns the cached entry for `url`, running `load` and storing its
    /// result on a miss.
    ///
    /// The default is not atomic; concurrent misses may load twice.
    fn get_or_load(&self, url: &str, load: &mut dyn FnMut() -> CachedImage) -> CachedImage {
        if let Some(hit) = self.get(url) {
            return hit;
        }
        let image = load();
        self.put(url, image.clone());
        image
    }
}

/// `HashMap` of per-URL cells. The map lock is only held to find a cell;
/// each cell is filled at most once, so concurrent loads of one URL wait for
/// a single load while other URLs proceed.
#[derive(Debug, Default)]
pub struct MemoryImageCache {
    entries: Mutex<HashMap<String, Arc<OnceLock<CachedImage>>>>,
}

impl MemoryImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs with a stored outcome.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|cell| cell.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<OnceLock<CachedImage>>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cell(&self, url: &str) -> Arc<OnceLock<CachedImage>> {
        self.lock().entry(url.to_owned()).or_default().clone()
    }
}

impl ImageCache for MemoryImageCache {
    fn get(&self, url: &str) -> Option<CachedImage> {
        self.lock().get(url).and_then(|cell| cell.get().cloned())
    }

    fn put(&self, url: &str, image: CachedImage) {
        self.lock().insert(url.to_owned(), Arc::new(OnceLock::from(image)));
    }

    fn get_or_load(&self, url: &str, load: &mut dyn FnMut() -> CachedImage) -> CachedImage {
        self.cell(url).get_or_init(|| load()).clone()
    }
}
