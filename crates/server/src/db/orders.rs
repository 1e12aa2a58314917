//! Order repository.

use chrono::Utc;
use juice_bar_core::{Juice, NewOrder, Order, OrderId, OrderStatus};

use super::{RepositoryError, Store};
use crate::events::CatalogEvent;

/// Repository for order operations.
pub struct OrderRepository<'a> {
    store: &'a Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All orders in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.store.read()?.orders.clone())
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::OrderNotFound` if no order has this id.
    pub fn get(&self, id: &OrderId) -> Result<Order, RepositoryError> {
        self.find(id)?
            .ok_or_else(|| RepositoryError::OrderNotFound(id.clone()))
    }

    /// Get an order by id, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn find(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let records = self.store.read()?;
        Ok(records.orders.iter().find(|order| &order.id == id).cloned())
    }

    /// Resolve the juices an order references, in item order.
    ///
    /// Items whose juice no longer exists are skipped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn juices_for(&self, order: &Order) -> Result<Vec<Juice>, RepositoryError> {
        let records = self.store.read()?;
        Ok(order
            .items
            .iter()
            .filter_map(|item| records.juices.iter().find(|juice| &juice.id == item))
            .cloned()
            .collect())
    }

    /// Place an order priced against the current catalog.
    ///
    /// Pricing and insertion happen under one write lock, so the total always
    /// reflects the catalog at the moment the order was stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the store lock is poisoned.
    pub fn create(&self, input: NewOrder) -> Result<Order, RepositoryError> {
        let order = {
            let mut records = self.store.write()?;
            let id = records.allocate_order_id();
            let order = input.into_order(id, &records.juices, Utc::now());
            records.orders.push(order.clone());
            order
        };

        tracing::info!(
            order_id = %order.id,
            items = order.items.len(),
            total = %order.total,
            "Order created"
        );
        self.store.publish(CatalogEvent::OrderCreated(order.clone()));
        Ok(order)
    }

    /// Set an order's status verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::OrderNotFound` if no order has this id.
    pub fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut records = self.store.write()?;
        let order = records
            .orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| RepositoryError::OrderNotFound(id.clone()))?;

        if !status.is_known() {
            tracing::debug!(order_id = %id, status = %status, "Non-standard order status");
        }
        order.status = status;
        tracing::info!(order_id = %id, status = %order.status, "Order status updated");
        Ok(order.clone())
    }
}
