use std::sync::Arc;

use serde::{Deserialize, Serialize};

use orderflow_core::{ProductId, StoreError};

/// A catalog product with its current price and stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    /// Units currently available for sale.
    pub quantity: u64,
}

/// One entry of a batch stock write: the product's new absolute quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub product_id: ProductId,
    pub new_quantity: u64,
}

/// Product catalog collaborator: batch lookup and batch quantity update.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// Resolve products by id in one batch. Ids with no catalog match are
    /// simply absent from the result; the result carries no particular
    /// order.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError>;

    /// Write new absolute quantities for a batch of products.
    ///
    /// Implementations must apply the whole batch or none of it, and reject
    /// unknown product ids with [`StoreError::Constraint`].
    async fn update_quantities(&self, updates: Vec<QuantityUpdate>) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        (**self).find_all_by_id(ids).await
    }

    async fn update_quantities(&self, updates: Vec<QuantityUpdate>) -> Result<(), StoreError> {
        (**self).update_quantities(updates).await
    }
}
