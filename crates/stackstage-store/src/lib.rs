//! # stackstage-store
//!
//! **Tier 0.5 (Analysis Store)**
//!
//! The get/put contract the exporter uses to fetch analysis results, plus an
//! in-memory implementation that is safe to share between request handlers.
//!
//! ## What belongs here
//! * The [`AnalysisStore`] trait and [`StoreError`]
//! * [`MemoryStore`]
//!
//! ## What does NOT belong here
//! * Producing analysis results
//! * Durable persistence

#![forbid(unsafe_code)]

mod error;
mod memory;

use std::sync::Arc;

use stackstage_types::AnalysisResult;

pub use error::StoreError;
pub use memory::MemoryStore;

/// Key-value access to analysis results by id.
///
/// Results are handed out as shared snapshots; a later `put` replaces the
/// stored value without affecting snapshots already returned.
pub trait AnalysisStore: Send + Sync {
    fn get(&self, id: &str) -> Result<Arc<AnalysisResult>, StoreError>;

    fn put(&self, id: &str, result: AnalysisResult) -> Result<(), StoreError>;

    /// Read-modify-write of one entry. No other writer to `id` can interleave
    /// between the read and the write.
    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut AnalysisResult),
    ) -> Result<Arc<AnalysisResult>, StoreError>;
}

impl<S: AnalysisStore + ?Sized> AnalysisStore for Arc<S> {
    fn get(&self, id: &str) -> Result<Arc<AnalysisResult>, StoreError> {
        (**self).get(id)
    }

    fn put(&self, id: &str, result: AnalysisResult) -> Result<(), StoreError> {
        (**self).put(id, result)
    }

    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut AnalysisResult),
    ) -> Result<Arc<AnalysisResult>, StoreError> {
        (**self).update(id, apply)
    }
}
