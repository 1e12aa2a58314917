//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use juice_bar_core::{JuiceId, NewOrder, Order, OrderId, OrderStatus};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Request body for placing an order.
///
/// `items` is kept as raw JSON so a non-array value gets the same 400 as a
/// missing one, while an array holding non-string ids gets its own message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub items: Option<Value>,
}

impl CreateOrderRequest {
    fn into_new_order(self) -> Result<NewOrder> {
        let customer_name = self.customer_name.filter(|name| !name.is_empty());
        let (Some(customer_name), Some(Value::Array(items))) = (customer_name, self.items) else {
            return Err(AppError::BadRequest(
                "Customer name and items array are required".to_string(),
            ));
        };

        let items = items
            .into_iter()
            .map(|item| match item {
                Value::String(id) => Some(JuiceId::new(id)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                AppError::BadRequest("Items must be an array of juice ids".to_string())
            })?;

        Ok(NewOrder {
            customer_name,
            items,
        })
    }
}

/// Request body for changing an order's status.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// List all orders.
///
/// # Errors
///
/// Returns an internal error if the store is unavailable.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.store().orders().list()?))
}

/// Show one order.
///
/// # Errors
///
/// Returns 404 if the order does not exist.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    Ok(Json(state.store().orders().get(&OrderId::new(id))?))
}

/// Place an order.
///
/// # Errors
///
/// Returns 400 if `customerName` or the `items` array is missing, or if an
/// item is not a string id.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>)> {
    let Json(body) = payload?;
    let order = state.store().orders().create(body.into_new_order()?)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Change an order's status.
///
/// # Errors
///
/// Returns 400 without a `status`, 404 if the order does not exist.
#[instrument(skip(state, payload))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Order>> {
    let Json(body) = payload?;
    let status = body
        .status
        .ok_or_else(|| AppError::BadRequest("Status is required".to_string()))?;
    let order = state
        .store()
        .orders()
        .update_status(&OrderId::new(id), OrderStatus::new(status))?;
    Ok(Json(order))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateOrderRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_order_request_requires_customer_and_item_array() {
        assert!(parse(r#"{"items": ["1"]}"#).into_new_order().is_err());
        assert!(parse(r#"{"customerName": "", "items": ["1"]}"#).into_new_order().is_err());
        assert!(parse(r#"{"customerName": "Test"}"#).into_new_order().is_err());
        assert!(parse(r#"{"customerName": "Test", "items": "1"}"#).into_new_order().is_err());
    }

    #[test]
    fn test_order_request_names_non_string_items() {
        let err = parse(r#"{"customerName": "Test", "items": [1, 3]}"#)
            .into_new_order()
            .unwrap_err();
        assert_eq!(err.to_string(), "Items must be an array of juice ids");
    }

    #[test]
    fn test_order_request_accepts_empty_item_list() {
        let order = parse(r#"{"customerName": "Test", "items": []}"#)
            .into_new_order()
            .unwrap();
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_order_request_keeps_item_order() {
        let order = parse(r#"{"customerName": "Test", "items": ["3", "1", "3"]}"#)
            .into_new_order()
            .unwrap();
        let ids: Vec<&str> = order.items.iter().map(JuiceId::as_str).collect();
        assert_eq!(ids, ["3", "1", "3"]);
    }
}
