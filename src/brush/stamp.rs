//! Stamp image handles and the keyed image store that resolves them.
//!
//! The engine only ever stores a [`StampHandle`]. Pixels are looked up through
//! a [`StampSource`] at render time, so the image cache lives outside the
//! engine and has its own lifecycle: filled when the host picks images,
//! emptied when it asks.

use crate::error::EngineError;
use log::{debug, info};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

/// Opaque reference to a stamp image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StampHandle(String);

impl StampHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StampHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StampHandle {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StampHandle {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Resolves stamp handles to images at render time.
///
/// Returning `None` makes the engine skip that stamp; it is never an error.
/// Cairo surfaces are reference counted, so returning an owned surface is a
/// cheap handle clone.
pub trait StampSource {
    fn resolve(&self, handle: &StampHandle) -> Option<cairo::ImageSurface>;
}

impl<T: StampSource + ?Sized> StampSource for Rc<T> {
    fn resolve(&self, handle: &StampHandle) -> Option<cairo::ImageSurface> {
        (**self).resolve(handle)
    }
}

/// A source that is mutably borrowed while the engine draws resolves nothing.
impl<T: StampSource> StampSource for RefCell<T> {
    fn resolve(&self, handle: &StampHandle) -> Option<cairo::ImageSurface> {
        self.try_borrow().ok().and_then(|source| source.resolve(handle))
    }
}

/// Source with no images; every stamp resolves to nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStamps;

impl StampSource for NoStamps {
    fn resolve(&self, _handle: &StampHandle) -> Option<cairo::ImageSurface> {
        None
    }
}

/// In-memory keyed store of decoded stamp images.
#[derive(Default)]
pub struct StampCache {
    images: HashMap<StampHandle, cairo::ImageSurface>,
}

impl fmt::Debug for StampCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampCache")
            .field("handles", &self.images.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StampCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an image under `handle`, returning any image it replaced.
    pub fn insert(
        &mut self,
        handle: impl Into<StampHandle>,
        image: cairo::ImageSurface,
    ) -> Option<cairo::ImageSurface> {
        let handle = handle.into();
        debug!(
            "Caching stamp '{}' ({}x{})",
            handle,
            image.width(),
            image.height()
        );
        self.images.insert(handle, image)
    }

    /// Decodes a PNG file and stores it under `handle`.
    ///
    /// # Errors
    /// [`EngineError::StampLoad`] if the file cannot be opened,
    /// [`EngineError::StampDecode`] if it is not a readable PNG.
    pub fn load_png(
        &mut self,
        handle: impl Into<StampHandle>,
        path: &Path,
    ) -> Result<(), EngineError> {
        let file = File::open(path).map_err(|source| EngineError::StampLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let image = cairo::ImageSurface::create_from_png(&mut BufReader::new(file)).map_err(
            |source| EngineError::StampDecode {
                path: path.to_path_buf(),
                source,
            },
        )?;
        let handle = handle.into();
        info!("Loaded stamp '{}' from {}", handle, path.display());
        self.insert(handle, image);
        Ok(())
    }

    pub fn remove(&mut self, handle: &StampHandle) -> Option<cairo::ImageSurface> {
        self.images.remove(handle)
    }

    pub fn contains(&self, handle: &StampHandle) -> bool {
        self.images.contains_key(handle)
    }

    /// Drops every cached image.
    pub fn clear(&mut self) {
        debug!("Clearing {} cached stamps", self.images.len());
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl StampSource for StampCache {
    fn resolve(&self, handle: &StampHandle) -> Option<cairo::ImageSurface> {
        self.images.get(handle).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tiny_image() -> cairo::ImageSurface {
        cairo::ImageSurface::create(cairo::Format::ARgb32, 2, 2).unwrap()
    }

    #[test]
    fn cache_lifecycle() {
        let mut cache = StampCache::new();
        assert!(cache.is_empty());

        assert!(cache.insert("leaf", tiny_image()).is_none());
        assert!(cache.insert("leaf", tiny_image()).is_some());
        assert_eq!(cache.len(), 1);
        assert!(cache.resolve(&"leaf".into()).is_some());
        assert!(cache.resolve(&"bark".into()).is_none());

        cache.insert("bark", tiny_image());
        assert!(cache.remove(&"bark".into()).is_some());
        assert!(!cache.contains(&"bark".into()));
        assert!(cache.contains(&"leaf".into()));

        cache.clear();
        assert!(cache.resolve(&"leaf".into()).is_none());
    }

    #[test]
    fn shared_cache_sees_later_inserts() {
        let shared = Rc::new(RefCell::new(StampCache::new()));
        let source: Rc<RefCell<StampCache>> = Rc::clone(&shared);
        assert!(source.resolve(&"dot".into()).is_none());

        shared.borrow_mut().insert("dot", tiny_image());
        assert!(source.resolve(&"dot".into()).is_some());
    }

    #[test]
    fn busy_shared_cache_resolves_nothing() {
        let shared = Rc::new(RefCell::new(StampCache::new()));
        shared.borrow_mut().insert("dot", tiny_image());

        let guard = shared.borrow_mut();
        assert!(shared.resolve(&"dot".into()).is_none());
        drop(guard);
        assert!(shared.resolve(&"dot".into()).is_some());
    }

    #[test]
    fn load_png_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        let mut bytes = Vec::new();
        tiny_image().write_to_png(&mut bytes).unwrap();
        File::create(&path).unwrap().write_all(&bytes).unwrap();

        let mut cache = StampCache::new();
        cache.load_png("dot", &path).unwrap();
        let image = cache.resolve(&"dot".into()).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));
    }

    #[test]
    fn load_png_reports_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = StampCache::new();

        let missing = cache.load_png("x", &dir.path().join("nope.png"));
        assert!(matches!(missing, Err(EngineError::StampLoad { .. })));

        let junk = dir.path().join("junk.png");
        std::fs::write(&junk, b"not a png").unwrap();
        let corrupt = cache.load_png("x", &junk);
        assert!(matches!(corrupt, Err(EngineError::StampDecode { .. })));
        assert!(cache.is_empty());
    }
}
