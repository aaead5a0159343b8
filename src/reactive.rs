//! Observable state cells consumed by the form orchestrator
//!
//! The orchestrator only needs a container whose mutations are visible to
//! subscribers; how a host UI maps notifications onto its own reactivity
//! system is out of scope.

use std::sync::{Arc, RwLock};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A thread-safe observable value cell.
///
/// Cloning a `Signal` yields another handle to the same cell.
pub struct Signal<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    value: RwLock<T>,
    subscribers: RwLock<Vec<Subscriber<T>>>,
}

impl<T: Clone> Signal<T> {
    /// Create a new cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                subscribers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.write().unwrap_or_else(|e| e.into_inner());
            *guard = value;
        }
        self.notify();
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut guard = self.inner.value.write().unwrap_or_else(|e| e.into_inner());
            f(&mut guard);
        }
        self.notify();
    }

    /// Register a callback invoked with the new value after every mutation.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(Arc::new(f));
    }

    // Both guards are released before any subscriber runs, so a subscriber
    // may call back into `set`/`update`/`subscribe` on this same cell.
    fn notify(&self) {
        let value = self.get();
        let subscribers: Vec<Subscriber<T>> = self
            .inner
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for subscriber in &subscribers {
            subscriber(&value);
        }
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| f.debug_tuple("Signal").field(value).finish())
    }
}
