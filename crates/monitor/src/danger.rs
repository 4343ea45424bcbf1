//! Registry of person names flagged as dangerous.
//!
//! Read on the hot path by severity derivation, mutated only by explicit
//! administrative requests. Mutations persist through a [`DangerListStore`]
//! before success is reported; how and where the list is stored is the
//! transport layer's concern.

use crate::error::MonitorError;
use std::collections::BTreeSet;
use std::sync::RwLock;
use tracing::info;

/// Persistence seam for the danger list.
pub trait DangerListStore: Send + Sync {
    /// Load the persisted name list. Missing backing data is an empty list,
    /// not an error.
    fn load(&self) -> Result<Vec<String>, MonitorError>;

    /// Persist the full (sorted, lowercase) name list.
    fn save(&self, names: &[String]) -> Result<(), MonitorError>;
}

/// In-memory no-op store for library consumers and tests.
#[derive(Debug, Default)]
pub struct MemoryDangerStore;

impl DangerListStore for MemoryDangerStore {
    fn load(&self) -> Result<Vec<String>, MonitorError> {
        Ok(Vec::new())
    }

    fn save(&self, _names: &[String]) -> Result<(), MonitorError> {
        Ok(())
    }
}

/// Set of lowercase names considered dangerous.
pub struct DangerRegistry {
    names: RwLock<BTreeSet<String>>,
    store: Box<dyn DangerListStore>,
}

impl DangerRegistry {
    /// Create a registry seeded from the store's persisted list.
    pub fn load(store: Box<dyn DangerListStore>) -> Result<Self, MonitorError> {
        let names: BTreeSet<String> = store
            .load()?
            .into_iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Ok(Self {
            names: RwLock::new(names),
            store,
        })
    }

    /// Empty registry with no persistence, for library/test use.
    pub fn in_memory() -> Self {
        Self {
            names: RwLock::new(BTreeSet::new()),
            store: Box::new(MemoryDangerStore),
        }
    }

    /// Case-insensitive membership check. Infallible; used by severity
    /// derivation on every weapon frame.
    pub fn contains(&self, name: &str) -> bool {
        let guard = self.names.read().unwrap_or_else(|e| e.into_inner());
        guard.contains(&name.to_lowercase())
    }

    /// Add a name. Idempotent; the updated list is persisted before success
    /// is reported.
    pub fn add(&self, name: &str) -> Result<(), MonitorError> {
        let normalized = name.trim().to_lowercase();
        let snapshot = {
            let mut guard = self.names.write().unwrap_or_else(|e| e.into_inner());
            guard.insert(normalized.clone());
            guard.iter().cloned().collect::<Vec<_>>()
        };
        self.store.save(&snapshot)?;
        info!(name = %normalized, "danger list entry added");
        Ok(())
    }

    /// Remove a name. Idempotent; the updated list is persisted before
    /// success is reported.
    pub fn remove(&self, name: &str) -> Result<(), MonitorError> {
        let normalized = name.trim().to_lowercase();
        let snapshot = {
            let mut guard = self.names.write().unwrap_or_else(|e| e.into_inner());
            guard.remove(&normalized);
            guard.iter().cloned().collect::<Vec<_>>()
        };
        self.store.save(&snapshot)?;
        info!(name = %normalized, "danger list entry removed");
        Ok(())
    }

    /// Sorted snapshot of the current list.
    pub fn names(&self) -> Vec<String> {
        let guard = self.names.read().unwrap_or_else(|e| e.into_inner());
        guard.iter().cloned().collect()
    }
}

impl std::fmt::Debug for DangerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DangerRegistry")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
