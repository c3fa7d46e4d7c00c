//! Per-class lock registry.
//!
//! Admission decisions are check-then-claim sequences over the ledger and
//! must be serialized per class. The registry hands out one `Mutex` per
//! class id on demand; distinct classes never contend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::types::ClassId;

/// Registry of per-class mutexes.
///
/// Locks are created lazily and retained for the lifetime of the registry;
/// the registry itself is guarded by a mutex that is only held for the map
/// lookup, never across an admission decision.
#[derive(Debug, Default)]
pub struct ClassLocks {
    inner: Mutex<HashMap<ClassId, Arc<Mutex<()>>>>,
}

impl ClassLocks {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch (or create) the lock for a class. Callers hold the returned
    /// mutex for the duration of their critical section.
    #[must_use]
    pub fn class_lock(&self, class_id: ClassId) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock();
        Arc::clone(map.entry(class_id).or_default())
    }
}
