//! Liveness endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::graphql::{GRAPHQL_PATH, GRAPHQL_WS_PATH};

/// Where each front-end is served.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub graphql: &'static str,
    pub rest: &'static str,
    pub subscriptions: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub endpoints: Endpoints,
}

/// Report that the server is up. Does not touch the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        endpoints: Endpoints {
            graphql: GRAPHQL_PATH,
            rest: "/api",
            subscriptions: GRAPHQL_WS_PATH,
        },
    })
}
