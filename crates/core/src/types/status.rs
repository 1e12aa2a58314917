//! Order status.
//!
//! Statuses form an open set: clients may move an order to any string. The
//! well-known values are exposed as constructors for convenience.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const PENDING: &'static str = "pending";
    pub const PROCESSING: &'static str = "processing";
    pub const SHIPPED: &'static str = "shipped";
    pub const DELIVERED: &'static str = "delivered";
    pub const CANCELLED: &'static str = "cancelled";

    /// Create a status from any caller-supplied value. No validation is applied.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Status of every freshly created order.
    #[must_use]
    pub fn pending() -> Self {
        Self::new(Self::PENDING)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the well-known statuses.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::PENDING | Self::PROCESSING | Self::SHIPPED | Self::DELIVERED | Self::CANCELLED
        )
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        Self(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default().as_str(), "pending");
    }

    #[test]
    fn test_unknown_status_is_accepted() {
        let status = OrderStatus::new("lost-in-transit");
        assert_eq!(status.to_string(), "lost-in-transit");
        assert!(!status.is_known());
        assert!(OrderStatus::new(OrderStatus::SHIPPED).is_known());
    }
}
