//! HTTP routes for the Juice Bar API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//!
//! # Juices
//! GET    /api/juices              - List (?category=, ?q=)
//! POST   /api/juices              - Create
//! GET    /api/juices/{id}         - Show
//! PUT    /api/juices/{id}         - Update present fields
//! DELETE /api/juices/{id}         - Delete
//!
//! # Orders
//! GET    /api/orders              - List
//! POST   /api/orders              - Place order
//! GET    /api/orders/{id}         - Show
//! PATCH  /api/orders/{id}/status  - Change status
//!
//! # GraphQL
//! GET    /graphql                 - GraphiQL IDE
//! POST   /graphql                 - Queries and mutations
//! GET    /graphql/ws              - Subscriptions
//! ```
//!
//! Unknown paths and unsupported methods on known paths get a JSON 404;
//! handler panics get a JSON 500.

pub mod health;
pub mod juices;
pub mod orders;

use std::any::Any;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Method, Request, StatusCode, header},
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::config::ServerConfig;
use crate::error::{AppError, MessageBody};
use crate::graphql;
use crate::middleware::{REQUEST_ID_HEADER, request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Create the juice routes router.
pub fn juice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(juices::index).post(juices::create))
        .route(
            "/{id}",
            get(juices::show)
                .put(juices::update)
                .delete(juices::destroy),
        )
        .method_not_allowed_fallback(route_not_found)
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", patch(orders::update_status))
        .method_not_allowed_fallback(route_not_found)
}

/// Create the REST routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/juices", juice_routes())
        .nest("/orders", order_routes())
}

/// Build the complete application: both front-ends plus the middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes())
        .merge(graphql::router(state.schema().clone()))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .layer(cors_layer(state.config()))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// CORS restricted to the configured origins.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

/// Shared by unknown paths and known paths hit with an unsupported method.
async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Turn a handler panic into the generic 500 body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody::new("Internal server error")),
    )
        .into_response()
}
