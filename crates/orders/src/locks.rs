//! Per-product lock map.
//!
//! `Product.quantity` is the only shared mutable resource in the workflow,
//! and it is read (validation) well before it is written (decrement). Two
//! concurrent orders for the same product could both validate against the
//! same snapshot and oversell — the classic lost-update race. [`ProductLocks`]
//! closes that window by serializing the whole read→persist→decrement span
//! per product id; orders touching disjoint products stay fully concurrent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use orderflow_core::ProductId;

/// Lazily-populated map of one async lock per product id.
///
/// Repeated lookups for the same id return the same lock, so every order
/// touching a given product contends on a single mutex.
#[derive(Debug, Default)]
pub struct ProductLocks {
    locks: Mutex<HashMap<ProductId, Arc<AsyncMutex<()>>>>,
}

impl ProductLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock for one product.
    fn entry(&self, id: ProductId) -> Arc<AsyncMutex<()>> {
        // A poisoned map is still structurally sound (inserts only), so
        // recover the guard instead of failing the order.
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(id).or_default())
    }

    /// Acquire the locks for every distinct id in the batch.
    ///
    /// Ids are deduplicated and acquired in sorted order so that two orders
    /// with overlapping product sets cannot deadlock. The returned guards
    /// release on drop.
    pub async fn acquire(&self, ids: &[ProductId]) -> Vec<OwnedMutexGuard<()>> {
        let mut keys = ids.to_vec();
        keys.sort_unstable();
        keys.dedup();

        let mut guards = Vec::with_capacity(keys.len());
        for key in keys {
            guards.push(self.entry(key).lock_owned().await);
        }
        guards
    }
}
