//! Query root.

use async_graphql::{Context, ID, Object};
use juice_bar_core::{JuiceId, OrderId};

use super::types::{JuiceObject, OrderObject};
use super::{store, to_graphql_error};

/// Read-only entry points.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The whole catalog in insertion order.
    async fn juices(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<JuiceObject>> {
        let juices = store(ctx)?.juices().list().map_err(to_graphql_error)?;
        Ok(juices.into_iter().map(JuiceObject).collect())
    }

    /// A single juice, or null when the id is unknown.
    async fn juice(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<JuiceObject>> {
        let juice = store(ctx)?
            .juices()
            .find(&JuiceId::new(id.0))
            .map_err(to_graphql_error)?;
        Ok(juice.map(JuiceObject))
    }

    /// Juices in exactly this category (case-sensitive).
    async fn juices_by_category(
        &self,
        ctx: &Context<'_>,
        category: String,
    ) -> async_graphql::Result<Vec<JuiceObject>> {
        let juices = store(ctx)?
            .juices()
            .by_category(&category)
            .map_err(to_graphql_error)?;
        Ok(juices.into_iter().map(JuiceObject).collect())
    }

    /// Case-insensitive search over name, description and category.
    async fn search_juices(
        &self,
        ctx: &Context<'_>,
        query: String,
    ) -> async_graphql::Result<Vec<JuiceObject>> {
        let juices = store(ctx)?
            .juices()
            .search(&query)
            .map_err(to_graphql_error)?;
        Ok(juices.into_iter().map(JuiceObject).collect())
    }

    /// Every order in insertion order.
    async fn orders(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<OrderObject>> {
        let orders = store(ctx)?.orders().list().map_err(to_graphql_error)?;
        Ok(orders.into_iter().map(OrderObject).collect())
    }

    /// A single order, or null when the id is unknown.
    async fn order(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<OrderObject>> {
        let order = store(ctx)?
            .orders()
            .find(&OrderId::new(id.0))
            .map_err(to_graphql_error)?;
        Ok(order.map(OrderObject))
    }
}
