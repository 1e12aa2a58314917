//! GraphQL front-end.
//!
//! # Endpoints
//!
//! ```text
//! GET  /graphql     - GraphiQL IDE
//! POST /graphql     - Queries and mutations
//! GET  /graphql/ws  - Subscriptions (graphql-ws / graphql-transport-ws)
//! ```
//!
//! Resolvers only translate between GraphQL types and the repositories in
//! [`crate::db`]. Not-found errors become execution errors carrying the
//! repository message; anything else is logged and reported as an internal
//! error without detail.

mod mutation;
mod query;
mod subscription;
mod types;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::db::{RepositoryError, Store};
use crate::state::AppState;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;
pub use types::{JuiceInput, JuiceObject, JuiceUpdateInput, OrderInput, OrderObject};

/// Path serving queries, mutations and the IDE.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Path serving subscriptions over WebSocket.
pub const GRAPHQL_WS_PATH: &str = "/graphql/ws";

/// The complete catalog schema.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Build the schema with `store` available to every resolver.
#[must_use]
pub fn build_schema(store: Store) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(store)
        .finish()
}

/// Build the GraphQL router.
pub fn router(schema: CatalogSchema) -> Router<AppState> {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route_service(GRAPHQL_WS_PATH, GraphQLSubscription::new(schema))
}

/// Execute a query or mutation.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(req.into_inner()).await.into()
}

/// Serve the GraphiQL IDE.
async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .subscription_endpoint(GRAPHQL_WS_PATH)
            .finish(),
    )
}

/// Fetch the store from resolver context.
fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    ctx.data::<Store>()
}

/// Convert a repository error into a GraphQL execution error, logging it first.
fn to_graphql_error(err: RepositoryError) -> async_graphql::Error {
    if err.is_not_found() {
        tracing::warn!(error = %err, "GraphQL resolver error");
        async_graphql::Error::new(err.to_string())
    } else {
        tracing::error!(error = %err, "GraphQL resolver failed");
        async_graphql::Error::new("Internal server error")
    }
}
