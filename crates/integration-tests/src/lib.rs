//! Integration tests for Juice Bar.
//!
//! Every test drives the full application router in process with
//! `tower::ServiceExt::oneshot`, so no listener or running server is needed.
//!
//! ```bash
//! cargo test -p juice-bar-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `rest_api` - REST routes, health, fallback and middleware headers
//! - `graphql_api` - Queries, mutations and subscriptions

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use juice_bar_server::config::ServerConfig;
use juice_bar_server::routes;
use juice_bar_server::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// A freshly seeded application.
#[derive(Clone)]
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

/// A response with its body decoded.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON, `Null` for an empty body, or the raw text otherwise.
    pub body: Value,
}

impl TestApp {
    /// Build the app over the seed data with default configuration.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(ServerConfig::default());
        let router = routes::app(state.clone());
        Self { state, router }
    }

    /// Send a request with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    /// Send a prepared request.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    /// Run a GraphQL operation through `POST /graphql`.
    pub async fn graphql(&self, query: &str, variables: Value) -> Value {
        let mut payload = serde_json::json!({ "query": query });
        if !variables.is_null() {
            payload["variables"] = variables;
        }
        let response = self.post("/graphql", &payload).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
