use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stackstage_types::AnalysisResult;
use tracing::{debug, warn};

use crate::{AnalysisStore, StoreError};

type Entries = HashMap<String, Arc<AnalysisResult>>;

/// In-memory store guarded by a single `RwLock`.
///
/// Readers run in parallel; `put` and `update` hold the write guard for the
/// whole operation. A poisoned lock is recovered: entries are replaced whole,
/// so a panicking writer cannot leave one half-written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id.trim())
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("analysis store lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("analysis store lock was poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

fn key(id: &str) -> Result<&str, StoreError> {
    let id = id.trim();
    if id.is_empty() {
        Err(StoreError::InvalidId)
    } else {
        Ok(id)
    }
}

impl AnalysisStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Arc<AnalysisResult>, StoreError> {
        let id = key(id)?;
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn put(&self, id: &str, mut result: AnalysisResult) -> Result<(), StoreError> {
        let id = key(id)?;
        if result.id.trim().is_empty() {
            result.id = id.to_string();
        }
        self.write().insert(id.to_string(), Arc::new(result));
        debug!(analysis_id = id, "analysis stored");
        Ok(())
    }

    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut AnalysisResult),
    ) -> Result<Arc<AnalysisResult>, StoreError> {
        let id = key(id)?;
        let mut entries = self.write();
        let slot = entries
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let mut next = AnalysisResult::clone(slot);
        apply(&mut next);
        *slot = Arc::new(next);
        debug!(analysis_id = id, "analysis updated");
        Ok(Arc::clone(slot))
    }
}
