//! Seed data inspection.

use juice_bar_core::{Juice, Order};
use juice_bar_server::db::seed;
use serde::Serialize;

/// The data a fresh server starts with.
#[derive(Debug, Serialize)]
pub struct SeedData {
    pub juices: Vec<Juice>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Build the seed catalog and the orders placed against it.
    #[must_use]
    pub fn load() -> Self {
        let juices = seed::juices();
        let orders = seed::orders(&juices);
        Self { juices, orders }
    }
}

/// Render the seed data as pretty JSON, in the same shape the REST API uses.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SeedData::load())
}
