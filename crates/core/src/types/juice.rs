//! Catalog records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::JuiceId;

/// Category assigned when a new juice does not name one.
pub const DEFAULT_CATEGORY: &str = "Fruit";

/// Image shown for juices created without an image.
pub const DEFAULT_IMAGE_URL: &str = "/images/placeholder.jpg";

/// A catalog item.
///
/// Prices are exact decimals internally and plain JSON numbers on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Juice {
    pub id: JuiceId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
    pub image_url: String,
}

impl Juice {
    /// Whether `needle` occurs in the name, description or category.
    ///
    /// `needle` must already be lowercased. An empty needle matches every juice.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Input for creating a juice. Optional fields fall back to catalog defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewJuice {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

impl NewJuice {
    /// Create input with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Build the stored record, applying defaults for omitted fields.
    #[must_use]
    pub fn into_juice(self, id: JuiceId) -> Juice {
        Juice {
            id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            price: self.price,
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            in_stock: self.in_stock.unwrap_or(true),
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

/// Partial update for a juice.
///
/// Only `Some` fields are written; `None` leaves the stored value untouched.
/// A present zero price or empty string is written like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JuiceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

impl JuiceUpdate {
    /// Merge the present fields over `juice`.
    pub fn apply_to(self, juice: &mut Juice) {
        if let Some(name) = self.name {
            juice.name = name;
        }
        if let Some(description) = self.description {
            juice.description = description;
        }
        if let Some(price) = self.price {
            juice.price = price;
        }
        if let Some(category) = self.category {
            juice.category = category;
        }
        if let Some(in_stock) = self.in_stock {
            juice.in_stock = in_stock;
        }
        if let Some(image_url) = self.image_url {
            juice.image_url = image_url;
        }
    }
}
