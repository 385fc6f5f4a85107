//! The order-placement workflow.

use std::collections::{HashMap, HashSet};

use orderflow_catalog::{ProductRepository, QuantityUpdate};
use orderflow_core::{DomainError, OrderId, ProductId};
use orderflow_customers::CustomerRepository;

use crate::error::OrderError;
use crate::locks::ProductLocks;
use crate::order::{CreateOrderRequest, NewOrder, NewOrderLine, Order};
use crate::repository::OrderRepository;

/// Places and looks up orders.
///
/// Collaborators are injected through the constructor; the service holds no
/// other state beyond the per-product lock map, so one shared instance
/// serves all concurrent callers.
#[derive(Debug)]
pub struct OrderService<C, P, O> {
    customers: C,
    catalog: P,
    orders: O,
    product_locks: ProductLocks,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, catalog: P, orders: O) -> Self {
        Self {
            customers,
            catalog,
            orders,
            product_locks: ProductLocks::new(),
        }
    }

    /// Validate stock, capture prices, persist the order, decrement
    /// inventory.
    ///
    /// Nothing before the order write has side effects, and the inventory
    /// write only happens once the order write succeeded. A failing
    /// inventory write after a successful order write surfaces as
    /// [`OrderError::InventoryUpdate`] with the persisted order id.
    ///
    /// Two concurrent calls requesting the same product serialize on that
    /// product's lock, so the later one validates against the already
    /// decremented quantity instead of the shared snapshot.
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        validate_request(&request)?;

        let requested_ids: Vec<ProductId> =
            request.lines.iter().map(|l| l.product_id).collect();

        // Held until the inventory write below has completed.
        let _guards = self.product_locks.acquire(&requested_ids).await;

        let customer = self
            .customers
            .find_by_id(request.customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound(request.customer_id))?;

        // Quantity/price snapshot for the whole request. The decrement at
        // the end works off this snapshot, never a fresh read.
        let snapshot = self.catalog.find_all_by_id(&requested_ids).await?;
        if snapshot.is_empty() {
            return Err(OrderError::NoProductsFound);
        }

        let by_id: HashMap<ProductId, u64> =
            snapshot.iter().map(|p| (p.id, p.price)).collect();

        // Every requested id must match the catalog; the first unmatched
        // request in input order names the error.
        for line in &request.lines {
            if !by_id.contains_key(&line.product_id) {
                return Err(OrderError::ProductNotFound(line.product_id));
            }
        }

        // Stock check, first violation in input order wins. Duplicate lines
        // for one product draw down the same remaining amount, so a request
        // cannot pass validation by splitting an oversized quantity across
        // lines.
        let mut remaining: HashMap<ProductId, u64> =
            snapshot.iter().map(|p| (p.id, p.quantity)).collect();
        for line in &request.lines {
            let Some(available) = remaining.get_mut(&line.product_id) else {
                return Err(OrderError::ProductNotFound(line.product_id));
            };
            if line.quantity > *available {
                return Err(OrderError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity,
                    available: *available,
                });
            }
            *available -= line.quantity;
        }

        // Capture the live catalog price per line; from here on the price is
        // frozen into the order.
        let lines: Vec<NewOrderLine> = request
            .lines
            .iter()
            .map(|line| NewOrderLine {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: by_id[&line.product_id],
            })
            .collect();

        let order = self.orders.create(NewOrder { customer, lines }).await?;

        // One batch write with the snapshot quantities minus what was just
        // persisted, one entry per distinct product in first-seen order.
        let mut seen: HashSet<ProductId> = HashSet::new();
        let mut updates: Vec<QuantityUpdate> = Vec::new();
        for line in &request.lines {
            if seen.insert(line.product_id) {
                if let Some(&new_quantity) = remaining.get(&line.product_id) {
                    updates.push(QuantityUpdate {
                        product_id: line.product_id,
                        new_quantity,
                    });
                }
            }
        }

        if let Err(source) = self.catalog.update_quantities(updates).await {
            tracing::error!(
                "inventory update failed after order {} was persisted: {}",
                order.id,
                source
            );
            return Err(OrderError::InventoryUpdate {
                order_id: order.id,
                source,
            });
        }

        tracing::info!(
            "order {} created for customer {} with {} line(s)",
            order.id,
            order.customer_id,
            order.lines.len()
        );

        Ok(order)
    }

    /// Pure read-through to the order store.
    pub async fn find_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }
}

fn validate_request(request: &CreateOrderRequest) -> Result<(), DomainError> {
    if request.lines.is_empty() {
        return Err(DomainError::validation(
            "order must contain at least one line",
        ));
    }
    if let Some(line) = request.lines.iter().find(|l| l.quantity == 0) {
        return Err(DomainError::validation(format!(
            "quantity for product {} must be positive",
            line.product_id
        )));
    }
    Ok(())
}
