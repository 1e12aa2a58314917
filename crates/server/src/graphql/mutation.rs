//! Mutation root.

use async_graphql::{Context, ID, Object};
use juice_bar_core::{JuiceId, JuiceUpdate, NewJuice, NewOrder, OrderId, OrderStatus};

use super::types::{JuiceInput, JuiceObject, JuiceUpdateInput, OrderInput, OrderObject};
use super::{store, to_graphql_error};

/// Write entry points.
///
/// Inputs are only shape-checked by the schema; there is no semantic
/// validation such as non-empty names or non-negative prices.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_juice(
        &self,
        ctx: &Context<'_>,
        input: JuiceInput,
    ) -> async_graphql::Result<JuiceObject> {
        let new_juice = NewJuice::try_from(input)?;
        let juice = store(ctx)?
            .juices()
            .create(new_juice)
            .map_err(to_graphql_error)?;
        Ok(JuiceObject(juice))
    }

    /// Change only the fields present in `input`.
    async fn update_juice(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: JuiceUpdateInput,
    ) -> async_graphql::Result<JuiceObject> {
        let update = JuiceUpdate::try_from(input)?;
        let juice = store(ctx)?
            .juices()
            .update(&JuiceId::new(id.0), update)
            .map_err(to_graphql_error)?;
        Ok(JuiceObject(juice))
    }

    async fn delete_juice(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        store(ctx)?
            .juices()
            .delete(&JuiceId::new(id.0))
            .map_err(to_graphql_error)
    }

    async fn create_order(
        &self,
        ctx: &Context<'_>,
        input: OrderInput,
    ) -> async_graphql::Result<OrderObject> {
        let order = store(ctx)?
            .orders()
            .create(NewOrder::from(input))
            .map_err(to_graphql_error)?;
        Ok(OrderObject(order))
    }

    /// Set the status to any string; no transition rules are enforced.
    async fn update_order_status(
        &self,
        ctx: &Context<'_>,
        id: ID,
        status: String,
    ) -> async_graphql::Result<OrderObject> {
        let order = store(ctx)?
            .orders()
            .update_status(&OrderId::new(id.0), OrderStatus::new(status))
            .map_err(to_graphql_error)?;
        Ok(OrderObject(order))
    }
}
