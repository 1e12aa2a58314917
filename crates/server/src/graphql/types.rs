//! GraphQL object and input types.

use async_graphql::{Context, ID, InputObject, Object};
use chrono::SecondsFormat;
use juice_bar_core::{Juice, JuiceId, JuiceUpdate, NewJuice, NewOrder, Order};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use super::{store, to_graphql_error};

/// A catalog item as exposed over GraphQL.
pub struct JuiceObject(pub Juice);

#[Object(name = "Juice")]
impl JuiceObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn price(&self) -> f64 {
        to_float(self.0.price)
    }

    async fn category(&self) -> &str {
        &self.0.category
    }

    async fn in_stock(&self) -> bool {
        self.0.in_stock
    }

    async fn image_url(&self) -> &str {
        &self.0.image_url
    }
}

/// A customer order as exposed over GraphQL.
pub struct OrderObject(pub Order);

#[Object(name = "Order")]
impl OrderObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn customer_name(&self) -> &str {
        &self.0.customer_name
    }

    /// Juice ids as placed, including ones no longer in the catalog.
    async fn items(&self) -> Vec<ID> {
        self.0.items.iter().map(|item| ID(item.to_string())).collect()
    }

    /// The referenced juices that still exist, in item order.
    async fn juices(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<JuiceObject>> {
        let juices = store(ctx)?
            .orders()
            .juices_for(&self.0)
            .map_err(to_graphql_error)?;
        Ok(juices.into_iter().map(JuiceObject).collect())
    }

    async fn total(&self) -> f64 {
        to_float(self.0.total)
    }

    async fn status(&self) -> &str {
        self.0.status.as_str()
    }

    /// ISO-8601 creation time in UTC.
    async fn created_at(&self) -> String {
        self.0
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Fields for a new juice.
#[derive(Debug, InputObject)]
pub struct JuiceInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

impl TryFrom<JuiceInput> for NewJuice {
    type Error = async_graphql::Error;

    fn try_from(input: JuiceInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: input.name,
            description: input.description,
            price: to_decimal(input.price)?,
            category: input.category,
            in_stock: input.in_stock,
            image_url: input.image_url,
        })
    }
}

/// Fields to change on an existing juice. Omitted fields are left as they are.
#[derive(Debug, Default, InputObject)]
pub struct JuiceUpdateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

impl TryFrom<JuiceUpdateInput> for JuiceUpdate {
    type Error = async_graphql::Error;

    fn try_from(input: JuiceUpdateInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: input.name,
            description: input.description,
            price: input.price.map(to_decimal).transpose()?,
            category: input.category,
            in_stock: input.in_stock,
            image_url: input.image_url,
        })
    }
}

/// Fields for a new order.
#[derive(Debug, InputObject)]
pub struct OrderInput {
    pub customer_name: String,
    pub items: Vec<ID>,
}

impl From<OrderInput> for NewOrder {
    fn from(input: OrderInput) -> Self {
        Self {
            customer_name: input.customer_name,
            items: input.items.into_iter().map(|id| JuiceId::new(id.0)).collect(),
        }
    }
}

fn to_float(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn to_decimal(value: f64) -> async_graphql::Result<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| async_graphql::Error::new("Invalid price"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_juice_input_converts_price_exactly() {
        let input = JuiceInput {
            name: "Mango Tango".to_string(),
            description: None,
            price: 5.75,
            category: None,
            in_stock: None,
            image_url: None,
        };
        let new_juice = NewJuice::try_from(input).unwrap();
        assert_eq!(new_juice.price, Decimal::new(575, 2));
    }

    #[test]
    fn test_update_input_keeps_absent_fields_absent() {
        let update = JuiceUpdate::try_from(JuiceUpdateInput {
            in_stock: Some(false),
            ..JuiceUpdateInput::default()
        })
        .unwrap();

        assert_eq!(update.in_stock, Some(false));
        assert!(update.price.is_none());
        assert!(update.name.is_none());
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        assert!(to_decimal(f64::NAN).is_err());
        assert!(to_decimal(f64::INFINITY).is_err());
    }
}
