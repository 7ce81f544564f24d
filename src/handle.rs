//! Shared access to the current catalog.
//!
//! Readers take an `Arc` snapshot and never see a catalog under
//! construction. A rebuild happens off to the side and is swapped in whole.

use crate::error::Result;
use crate::model::Catalog;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        CatalogHandle {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a new catalog, returning the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(catalog))
    }

    /// Build a fresh catalog and swap it in. On failure the current catalog
    /// stays in place.
    pub fn rebuild<F>(&self, build: F) -> Result<Arc<Catalog>>
    where
        F: FnOnce() -> Result<Catalog>,
    {
        let fresh = build()?;
        self.replace(fresh);
        Ok(self.snapshot())
    }
}
