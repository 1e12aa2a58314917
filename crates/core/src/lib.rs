//! Juice Bar Core - Shared types library.
//!
//! This crate provides the record types used across all Juice Bar components:
//! - `server` - GraphQL and REST API over the in-memory catalog
//! - `cli` - Command-line tools for schema export and seed inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no locking,
//! no HTTP. Storage and the query/command layer live in the server crate.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, juice and order records, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
