use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use orderflow_catalog::{Product, ProductRepository, QuantityUpdate};
use orderflow_core::{ProductId, StoreError};

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product (replacing any previous record with the same id).
    pub fn insert(&self, product: Product) {
        let mut products = self
            .products
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        products.insert(product.id, product);
    }

    /// Current stored quantity for a product, if present.
    pub fn quantity_of(&self, id: ProductId) -> Option<u64> {
        let products = self
            .products
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        products.get(&id).map(|p| p.quantity)
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::unavailable("product map lock poisoned"))?;

        // One entry per distinct requested id; unknown ids are simply absent.
        let mut seen = HashSet::new();
        Ok(ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| products.get(id).cloned())
            .collect())
    }

    async fn update_quantities(&self, updates: Vec<QuantityUpdate>) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::unavailable("product map lock poisoned"))?;

        // Verify the whole batch before touching anything: all or nothing.
        for update in &updates {
            if !products.contains_key(&update.product_id) {
                return Err(StoreError::constraint(format!(
                    "unknown product {}",
                    update.product_id
                )));
            }
        }

        for update in updates {
            if let Some(product) = products.get_mut(&update.product_id) {
                product.quantity = update.new_quantity;
            }
        }
        Ok(())
    }
}
