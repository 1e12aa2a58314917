//! HTTP middleware for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Panic catcher (JSON 500)
//! 2. CORS allow-list
//! 3. `TraceLayer` (request span)
//! 4. Request ID (recorded into the request span)
//! 5. Security headers

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
