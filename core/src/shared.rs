use crate::SearchEngine;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle enforcing one writer or many readers over a [`SearchEngine`].
#[derive(Clone, Default)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedSearchEngine {
    pub fn new(engine: SearchEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    /// Run a read-only operation. Concurrent readers do not block each other.
    pub fn read<R>(&self, f: impl FnOnce(&SearchEngine) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Run a mutation with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut SearchEngine) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }
}
