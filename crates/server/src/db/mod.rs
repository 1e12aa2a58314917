//! In-memory record store and the query/command layer over it.
//!
//! # Records
//!
//! - `juices` - The product catalog, in insertion order
//! - `orders` - Customer orders, in insertion order
//!
//! Both sequences and their id counters sit behind one `RwLock`. The lock is
//! taken per operation and never held across an `.await`, so every operation
//! is atomic with respect to other requests.
//!
//! Both front-ends (GraphQL and REST) go through [`JuiceRepository`] and
//! [`OrderRepository`]; neither touches [`Records`] directly.
//!
//! Nothing is persisted. Every process starts from the seed data in [`seed`].

pub mod juices;
pub mod orders;
pub mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use juice_bar_core::{Juice, JuiceId, Order, OrderId};
use thiserror::Error;
use tokio::sync::broadcast;

use crate::events::{CatalogEvent, EventBus};

pub use juices::JuiceRepository;
pub use orders::OrderRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No juice has the requested id.
    #[error("Juice not found")]
    JuiceNotFound(JuiceId),

    /// No order has the requested id.
    #[error("Order not found")]
    OrderNotFound(OrderId),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}

impl RepositoryError {
    /// Whether this error means the referenced record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::JuiceNotFound(_) | Self::OrderNotFound(_))
    }
}

/// The mutable state guarded by the store lock.
#[derive(Debug, Default)]
pub struct Records {
    pub(crate) juices: Vec<Juice>,
    pub(crate) orders: Vec<Order>,
    next_juice_seq: u64,
    next_order_seq: u64,
}

impl Records {
    /// Build records from existing data, continuing the id sequences after the
    /// highest numeric id present.
    #[must_use]
    pub fn from_parts(juices: Vec<Juice>, orders: Vec<Order>) -> Self {
        let next_juice_seq = next_seq(juices.iter().map(|j| j.id.as_str()));
        let next_order_seq = next_seq(orders.iter().map(|o| o.id.as_str()));
        Self {
            juices,
            orders,
            next_juice_seq,
            next_order_seq,
        }
    }

    /// Allocate the next juice id. Ids are never reused, even after deletion.
    fn allocate_juice_id(&mut self) -> JuiceId {
        self.next_juice_seq += 1;
        JuiceId::from_sequence(self.next_juice_seq)
    }

    fn allocate_order_id(&mut self) -> OrderId {
        self.next_order_seq += 1;
        OrderId::from_sequence(self.next_order_seq)
    }
}

/// Highest numeric id in `ids`, or zero.
fn next_seq<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0)
}

/// Shared handle to the record store.
///
/// Cheaply cloneable via `Arc`; all clones see the same records.
#[derive(Clone)]
pub struct Store {
    records: Arc<RwLock<Records>>,
    events: EventBus,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(EventBus::default())
    }
}

impl Store {
    /// Create an empty store publishing to `events`.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self::with_records(Records::default(), events)
    }

    /// Create a store holding the seed catalog and orders.
    #[must_use]
    pub fn seeded(events: EventBus) -> Self {
        let juices = seed::juices();
        let orders = seed::orders(&juices);
        Self::with_records(Records::from_parts(juices, orders), events)
    }

    /// Create a store over prepared records.
    #[must_use]
    pub fn with_records(records: Records, events: EventBus) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            events,
        }
    }

    /// Juice queries and commands.
    #[must_use]
    pub const fn juices(&self) -> JuiceRepository<'_> {
        JuiceRepository::new(self)
    }

    /// Order queries and commands.
    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(self)
    }

    /// Receive catalog events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Records>, RepositoryError> {
        self.records.read().map_err(|_| RepositoryError::Poisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, RepositoryError> {
        self.records.write().map_err(|_| RepositoryError::Poisoned)
    }

    pub(crate) fn publish(&self, event: CatalogEvent) {
        self.events.publish(event);
    }
}
