use arc_swap::ArcSwapOption;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::loader::CorpusLoader;
use super::snapshot::{DirectoryError, DirectorySnapshot};
use crate::matching::engine::{MatchingConfig, MatchingEngine, SearchError};

/// The currently published directory snapshot.
///
/// Readers get a whole snapshot or nothing: [`DirectoryHandle::publish`]
/// replaces the reference in one atomic swap and reads take no lock. A
/// search holds its own `Arc` for the whole call, so a refresh landing
/// mid-search does not affect it.
#[derive(Debug, Default)]
pub struct DirectoryHandle {
    current: ArcSwapOption<DirectorySnapshot>,
    last_version: AtomicU64,
}

impl DirectoryHandle {
    /// Create a handle with nothing published yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle and publish an initial snapshot
    pub fn with_snapshot(snapshot: DirectorySnapshot) -> Self {
        let handle = Self::new();
        handle.publish(snapshot);
        handle
    }

    /// Publish a snapshot, replacing the current one. Returns its version.
    pub fn publish(&self, mut snapshot: DirectorySnapshot) -> u64 {
        let version = self.last_version.fetch_add(1, Ordering::Relaxed) + 1;
        snapshot.set_version(version);

        tracing::info!(
            "Published directory v{}: {} records, {} canonical names",
            version,
            snapshot.len(),
            snapshot.canonical_count()
        );

        self.current.store(Some(Arc::new(snapshot)));
        version
    }

    /// The current snapshot, if one was ever published
    pub fn current(&self) -> Option<Arc<DirectorySnapshot>> {
        self.current.load_full()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Load a new snapshot and publish it.
    ///
    /// On failure the current snapshot stays in place and keeps serving.
    pub fn refresh_from(&self, loader: &dyn CorpusLoader) -> Result<u64, DirectoryError> {
        match loader.load() {
            Ok(snapshot) => Ok(self.publish(snapshot)),
            Err(e) => {
                if self.is_loaded() {
                    tracing::warn!(
                        "Refresh from {} failed, keeping previous directory: {}",
                        loader.describe(),
                        e
                    );
                } else {
                    tracing::error!(
                        "Refresh from {} failed with no directory loaded: {}",
                        loader.describe(),
                        e
                    );
                }
                Err(e)
            }
        }
    }

    /// Search the current snapshot with the default configuration
    pub fn search(
        &self,
        query: &str,
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<String>, SearchError> {
        self.search_with_config(&MatchingConfig::default(), query, limit, cutoff)
    }

    /// Search the current snapshot with a custom configuration
    pub fn search_with_config(
        &self,
        config: &MatchingConfig,
        query: &str,
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<String>, SearchError> {
        let snapshot = self.current().ok_or(SearchError::DirectoryUnavailable)?;
        MatchingEngine::with_config(&snapshot, config.clone()).search(query, limit, cutoff)
    }
}
