use std::sync::Arc;

use serde::{Deserialize, Serialize};

use orderflow_core::{CustomerId, StoreError};

/// A customer record as seen by the order workflow.
///
/// `name`/`email` are display attributes only; the workflow never inspects
/// them, it just needs proof the customer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

/// Customer lookup collaborator.
///
/// Implementations must be side-effect free: the workflow treats a lookup as
/// pure read. A missing customer is `Ok(None)`, not an error — only
/// infrastructure failures map to [`StoreError`].
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Resolve a customer by id. `None` when the id is unknown.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;
}

#[async_trait::async_trait]
impl<S> CustomerRepository for Arc<S>
where
    S: CustomerRepository + ?Sized,
{
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).find_by_id(id).await
    }
}
