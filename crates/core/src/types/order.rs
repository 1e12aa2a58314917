//! Customer order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{JuiceId, OrderId};
use super::juice::Juice;
use super::status::OrderStatus;

/// A customer purchase.
///
/// `items` are weak references into the catalog: they may name juices that
/// never existed or have since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub items: Vec<JuiceId>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Input for placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub items: Vec<JuiceId>,
}

impl NewOrder {
    #[must_use]
    pub fn new<I, S>(customer_name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<JuiceId>,
    {
        Self {
            customer_name: customer_name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a pending order, pricing each item against `catalog`.
    ///
    /// Items missing from the catalog contribute nothing to the total but are
    /// kept in the order.
    #[must_use]
    pub fn into_order(self, id: OrderId, catalog: &[Juice], created_at: DateTime<Utc>) -> Order {
        let total = order_total(&self.items, catalog);
        Order {
            id,
            customer_name: self.customer_name,
            items: self.items,
            total,
            status: OrderStatus::pending(),
            created_at,
        }
    }
}

/// Sum the current price of every item that resolves in `catalog`.
#[must_use]
pub fn order_total(items: &[JuiceId], catalog: &[Juice]) -> Decimal {
    items
        .iter()
        .filter_map(|item| catalog.iter().find(|juice| &juice.id == item))
        .map(|juice| juice.price)
        .sum()
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::juice::NewJuice;

    fn catalog() -> Vec<Juice> {
        vec![
            NewJuice::new("Orange Juice", Decimal::new(499, 2)).into_juice(JuiceId::new("1")),
            NewJuice::new("Berry Blast", Decimal::new(699, 2)).into_juice(JuiceId::new("3")),
        ]
    }

    #[test]
    fn test_total_sums_resolvable_items() {
        let total = order_total(&[JuiceId::new("1"), JuiceId::new("3")], &catalog());
        assert_eq!(total, Decimal::new(1198, 2));
    }

    #[test]
    fn test_total_counts_repeated_items() {
        let total = order_total(&[JuiceId::new("1"), JuiceId::new("1")], &catalog());
        assert_eq!(total, Decimal::new(998, 2));
    }

    #[test]
    fn test_unresolved_items_contribute_zero_but_are_kept() {
        let order = NewOrder::new("Test", ["1", "99"]).into_order(
            OrderId::new("7"),
            &catalog(),
            Utc::now(),
        );

        assert_eq!(order.total, Decimal::new(499, 2));
        assert_eq!(order.items, vec![JuiceId::new("1"), JuiceId::new("99")]);
        assert_eq!(order.status, OrderStatus::pending());
    }

    #[test]
    fn test_order_json_shape() {
        let order =
            NewOrder::new("Test", ["3"]).into_order(OrderId::new("1"), &catalog(), Utc::now());
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["customerName"], "Test");
        assert_eq!(value["items"][0], "3");
        assert_eq!(value["status"], "pending");
        let created_at = value["createdAt"].as_str().unwrap();
        assert_eq!(created_at.len(), "2024-05-01T09:30:00.000Z".len());
        assert!(created_at.ends_with('Z'));
    }
}
