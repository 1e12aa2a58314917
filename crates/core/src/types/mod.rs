//! Core types for Juice Bar.
//!
//! This module provides the catalog and order records plus type-safe wrappers
//! for their identifiers and statuses.

pub mod id;
pub mod juice;
pub mod order;
pub mod status;

pub use id::*;
pub use juice::{DEFAULT_CATEGORY, DEFAULT_IMAGE_URL, Juice, JuiceUpdate, NewJuice};
pub use order::{NewOrder, Order};
pub use status::OrderStatus;
