//! Seed catalog loaded at startup.

use chrono::{Duration, Utc};
use juice_bar_core::{Juice, JuiceId, NewJuice, NewOrder, Order, OrderId, OrderStatus};
use rust_decimal::Decimal;

/// The five juices every process starts with.
#[must_use]
pub fn juices() -> Vec<Juice> {
    let entries = [
        (
            "Orange Juice",
            "Freshly squeezed oranges packed with vitamin C",
            499,
            "Fruit",
            true,
            "/images/orange-juice.jpg",
        ),
        (
            "Green Detox",
            "Kale, spinach, cucumber, celery and green apple",
            599,
            "Vegetable",
            true,
            "/images/green-detox.jpg",
        ),
        (
            "Berry Blast",
            "Strawberries, blueberries and raspberries blended smooth",
            699,
            "Smoothie",
            true,
            "/images/berry-blast.jpg",
        ),
        (
            "Pineapple Paradise",
            "Sweet pineapple with a hint of coconut",
            549,
            "Fruit",
            true,
            "/images/pineapple-paradise.jpg",
        ),
        (
            "Carrot Ginger Zing",
            "Carrot and ginger with a squeeze of lemon",
            449,
            "Vegetable",
            false,
            "/images/carrot-ginger-zing.jpg",
        ),
    ];

    (1..)
        .zip(entries)
        .map(|(seq, (name, description, cents, category, in_stock, image_url))| {
            NewJuice {
                name: name.to_string(),
                description: Some(description.to_string()),
                price: Decimal::new(cents, 2),
                category: Some(category.to_string()),
                in_stock: Some(in_stock),
                image_url: Some(image_url.to_string()),
            }
            .into_juice(JuiceId::from_sequence(seq))
        })
        .collect()
}

/// The two orders every process starts with, priced against `catalog`.
#[must_use]
pub fn orders(catalog: &[Juice]) -> Vec<Order> {
    let now = Utc::now();

    let mut delivered = NewOrder::new("Alice Johnson", ["1", "3"]).into_order(
        OrderId::from_sequence(1),
        catalog,
        now - Duration::days(2),
    );
    delivered.status = OrderStatus::new(OrderStatus::DELIVERED);

    let pending = NewOrder::new("Bob Smith", ["2", "4", "5"]).into_order(
        OrderId::from_sequence(2),
        catalog,
        now - Duration::hours(3),
    );

    vec![delivered, pending]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<String> = juices().into_iter().map(|j| j.id.into()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_seed_order_totals() {
        let catalog = juices();
        let orders = orders(&catalog);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].total, Decimal::new(1198, 2));
        assert_eq!(orders[0].status.as_str(), "delivered");
        assert_eq!(orders[1].total, Decimal::new(1597, 2));
        assert_eq!(orders[1].status.as_str(), "pending");
    }
}
