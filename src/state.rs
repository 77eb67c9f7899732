// src/state.rs

use crate::data::{self, Dataset, LoadError};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Outcome of the most recent load. A failed reload replaces a previously
/// good snapshot, so `/` reports the failure until a load succeeds again.
#[derive(Debug, Clone)]
pub enum Snapshot {
    Ready(Arc<Dataset>),
    Failed(String),
}

/// The current dataset snapshot, shared across request workers. Reload swaps
/// the whole snapshot under a write lock, so readers see either the old or
/// the new dataset, never a torn one.
pub struct SnapshotState {
    inner: RwLock<Snapshot>,
}

impl SnapshotState {
    pub fn new(outcome: Result<Dataset, LoadError>) -> Self {
        SnapshotState {
            inner: RwLock::new(Self::to_snapshot(outcome)),
        }
    }

    pub fn current(&self) -> Snapshot {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Reload from `path` and swap the snapshot in. Returns whether the load
    /// succeeded. The load itself runs outside the lock.
    pub fn reload(&self, path: &Path) -> bool {
        let outcome = data::load(path);
        let ok = outcome.is_ok();
        let snapshot = Self::to_snapshot(outcome);
        match self.inner.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
        ok
    }

    fn to_snapshot(outcome: Result<Dataset, LoadError>) -> Snapshot {
        match outcome {
            Ok(dataset) => Snapshot::Ready(Arc::new(dataset)),
            Err(err) => Snapshot::Failed(err.to_string()),
        }
    }
}
