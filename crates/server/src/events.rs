//! Catalog event bus.
//!
//! Create operations publish here after the record is stored; GraphQL
//! subscriptions consume the stream. Publishing with nobody listening is
//! normal and not an error.

use juice_bar_core::{Juice, Order};
use tokio::sync::broadcast;

/// Default number of events buffered per subscriber before it starts lagging.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Something that happened to the catalog.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    JuiceAdded(Juice),
    OrderCreated(Order),
}

/// Broadcast channel for catalog events.
///
/// Cheaply cloneable; all clones share one channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<CatalogEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Configuration rejects zero before this
    /// is reached.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Send an event to every current subscriber.
    pub fn publish(&self, event: CatalogEvent) {
        match self.tx.send(event) {
            Ok(receivers) => tracing::debug!(receivers, "Catalog event published"),
            Err(_) => tracing::trace!("Catalog event dropped, no subscribers"),
        }
    }

    /// Receive every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.tx.subscribe()
    }
}
