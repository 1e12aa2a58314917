//! Juice Bar server library.
//!
//! The in-memory catalog and order store, its event bus, and the GraphQL and
//! REST front-ends over it. The binary in `main.rs` only wires configuration,
//! logging and the listener around [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod state;
