use std::sync::{Arc, Mutex, MutexGuard};

use super::event::GestureEvent;
use super::geometry::ContentSize;
use super::viewport::{TransformSnapshot, ViewportTransform};

/// A `ViewportTransform` that can be fed from several threads.
///
/// Pinch and pan updates are serialized through one lock per image, so an
/// update never observes a half-applied one. Clones share the same state.
#[derive(Clone, Debug)]
pub struct SharedViewport {
    inner: Arc<Mutex<ViewportTransform>>,
}

impl SharedViewport {
    pub fn new(content: ContentSize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewportTransform::new(content))),
        }
    }

    pub fn apply(&self, event: GestureEvent) {
        self.lock().apply(event);
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the transform.
    pub fn with<R>(&self, f: impl FnOnce(&mut ViewportTransform) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, ViewportTransform> {
        // Every update leaves the transform clamped, so a poisoned value is still valid.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
