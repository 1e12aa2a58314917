//! Subscription root, fed by the catalog event bus.

use async_graphql::{Context, Subscription};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::{Stream, StreamExt};

use super::store;
use super::types::{JuiceObject, OrderObject};
use crate::events::CatalogEvent;

/// Push entry points.
#[derive(Debug, Default)]
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Every juice created after the subscription starts.
    async fn juice_added(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<impl Stream<Item = JuiceObject>> {
        let events = BroadcastStream::new(store(ctx)?.subscribe());
        Ok(events.filter_map(|event| match skip_lagged(event)? {
            CatalogEvent::JuiceAdded(juice) => Some(JuiceObject(juice)),
            CatalogEvent::OrderCreated(_) => None,
        }))
    }

    /// Every order placed after the subscription starts.
    async fn order_created(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<impl Stream<Item = OrderObject>> {
        let events = BroadcastStream::new(store(ctx)?.subscribe());
        Ok(events.filter_map(|event| match skip_lagged(event)? {
            CatalogEvent::OrderCreated(order) => Some(OrderObject(order)),
            CatalogEvent::JuiceAdded(_) => None,
        }))
    }
}

/// A slow subscriber loses the events it fell behind on and carries on.
fn skip_lagged(event: Result<CatalogEvent, BroadcastStreamRecvError>) -> Option<CatalogEvent> {
    match event {
        Ok(event) => Some(event),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "Subscription lagged, events dropped");
            None
        }
    }
}
