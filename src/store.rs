// src/store.rs
//! Process-wide mapping from file path to its current diagnostic set.
//!
//! Single source of truth for what is currently wrong with each file. An
//! entry always reflects the most recently *completed* analysis of that
//! path: `replace` wholly swaps the entry, never merges. The store is owned
//! by the session and passed by reference, never a module-level global.

use crate::types::Diagnostic;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct DiagnosticsStore {
    // Mutex so threaded hosts keep per-entry updates atomic. The scan loop
    // itself is sequential and never holds the lock across a file read.
    inner: Mutex<BTreeMap<PathBuf, Vec<Diagnostic>>>,
}

impl DiagnosticsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholly replaces the diagnostic set for a path. Last completed
    /// analysis wins regardless of start order.
    pub fn replace(&self, path: &Path, diagnostics: Vec<Diagnostic>) {
        let mut map = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        map.insert(path.to_path_buf(), diagnostics);
    }

    /// Current diagnostics for one path, if any analysis has completed.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<Vec<Diagnostic>> {
        let map = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        map.get(path).cloned()
    }

    /// Snapshot of the whole store for report rendering. Path-ordered.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<Diagnostic>> {
        let map = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        map.clone()
    }

    /// Drops entries for paths no longer in the workspace.
    pub fn retain(&self, keep: &[PathBuf]) {
        let mut map = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        map.retain(|path, _| keep.contains(path));
    }

    #[must_use]
    pub fn total_diagnostics(&self) -> usize {
        let map = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        map.values().map(Vec::len).sum()
    }
}
