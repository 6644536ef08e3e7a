//! # Catalog Store
//!
//! Copy-on-write holder for the current [`AssumptionsCatalog`].
//!
//! Readers take an `Arc` snapshot and keep using it for as long as they like;
//! writers build a complete new catalog and swap it in. A reader never sees a
//! half-applied update, and an estimate computed from a snapshot is unaffected
//! by later edits.
//!
//! ```rust
//! use cost_core::catalog::{AssumptionsCatalog, CatalogKey, CatalogStore};
//!
//! let store = CatalogStore::new(AssumptionsCatalog::new());
//! let before = store.snapshot();
//!
//! store.update(&AssumptionsCatalog::new().with(CatalogKey::PricePerSqFt, 3200.0));
//!
//! assert_eq!(before.catalog.get(CatalogKey::PricePerSqFt), 2500.0);
//! assert_eq!(store.snapshot().catalog.get(CatalogKey::PricePerSqFt), 3200.0);
//! assert_eq!(store.snapshot().revision, before.revision + 1);
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AssumptionsCatalog;

/// An immutable catalog version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Incremented on every replacement
    pub revision: u64,

    /// When this version was installed
    pub updated_at: DateTime<Utc>,

    pub catalog: AssumptionsCatalog,
}

/// Shared owner of the current catalog snapshot.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn new(catalog: AssumptionsCatalog) -> Self {
        CatalogStore {
            current: RwLock::new(Arc::new(CatalogSnapshot {
                revision: 0,
                updated_at: Utc::now(),
                catalog,
            })),
        }
    }

    /// Current snapshot. Cheap; clones the `Arc` only.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        // A panicked writer cannot leave a partial value behind: the slot
        // only ever holds a complete Arc.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Install `catalog` wholesale. Returns the new revision.
    pub fn replace(&self, catalog: AssumptionsCatalog) -> u64 {
        self.swap(|_| catalog)
    }

    /// Overlay `patch` onto a copy of the current catalog and install it.
    pub fn update(&self, patch: &AssumptionsCatalog) -> u64 {
        self.swap(|current| {
            let mut next = current.clone();
            next.merge(patch);
            next
        })
    }

    /// Drop every stored value so all lookups use defaults.
    pub fn reset(&self) -> u64 {
        self.replace(AssumptionsCatalog::new())
    }

    fn swap(&self, build: impl FnOnce(&AssumptionsCatalog) -> AssumptionsCatalog) -> u64 {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = CatalogSnapshot {
            revision: guard.revision + 1,
            updated_at: Utc::now(),
            catalog: build(&guard.catalog),
        };
        debug!(revision = next.revision, entries = next.catalog.len(), "catalog replaced");
        let revision = next.revision;
        *guard = Arc::new(next);
        revision
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::new(AssumptionsCatalog::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKey;
    use crate::spec::LocationType;

    #[test]
    fn test_old_snapshot_unchanged_after_replace() {
        let store = CatalogStore::new(AssumptionsCatalog::new().with(CatalogKey::DoorCost, 9000.0));
        let old = store.snapshot();

        let revision = store.replace(AssumptionsCatalog::new());
        assert_eq!(revision, 1);
        assert_eq!(old.catalog.get(CatalogKey::DoorCost), 9000.0);
        assert_eq!(store.snapshot().catalog.get(CatalogKey::DoorCost), 8000.0);
    }

    #[test]
    fn test_update_merges_factor_tables() {
        let mut initial = AssumptionsCatalog::new();
        initial.set_location_factor(LocationType::Urban, 1.4);
        let store = CatalogStore::new(initial);

        let mut patch = AssumptionsCatalog::new();
        patch.set_location_factor(LocationType::Rural, 0.7);
        store.update(&patch);

        let snap = store.snapshot();
        assert_eq!(snap.catalog.location_factor(LocationType::Urban), 1.4);
        assert_eq!(snap.catalog.location_factor(LocationType::Rural), 0.7);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = CatalogStore::default();
        store.update(&AssumptionsCatalog::new().with(CatalogKey::PricePerSqFt, 4000.0));
        store.reset();

        let snap = store.snapshot();
        assert!(snap.catalog.is_empty());
        assert_eq!(snap.revision, 2);
        assert_eq!(snap.catalog.get(CatalogKey::PricePerSqFt), 2500.0);
    }

    #[test]
    fn test_concurrent_readers_see_whole_catalogs() {
        let store = Arc::new(CatalogStore::default());
        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 1..=50 {
                    let price = 2500.0 + i as f64;
                    store.replace(
                        AssumptionsCatalog::new()
                            .with(CatalogKey::PricePerSqFt, price)
                            .with(CatalogKey::BrickPrice, price),
                    );
                }
            })
        };

        for _ in 0..200 {
            let snap = store.snapshot();
            assert_eq!(
                snap.catalog.get(CatalogKey::PricePerSqFt),
                if snap.revision == 0 { 2500.0 } else { snap.catalog.get(CatalogKey::BrickPrice) }
            );
        }
        writer.join().unwrap();
        assert_eq!(store.snapshot().revision, 50);
    }
}
