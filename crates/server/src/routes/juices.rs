//! Juice route handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use juice_bar_core::{Juice, JuiceId, JuiceUpdate, NewJuice};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, MessageBody, Result};
use crate::state::AppState;

/// Listing filters.
#[derive(Debug, Default, Deserialize)]
pub struct JuiceListQuery {
    /// Exact, case-sensitive category.
    pub category: Option<String>,
    /// Case-insensitive search text.
    pub q: Option<String>,
}

/// Request body for creating a juice.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJuiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

impl CreateJuiceRequest {
    /// Check the required fields. A zero price is a real price.
    fn into_new_juice(self) -> Result<NewJuice> {
        let name = self.name.filter(|name| !name.is_empty());
        let (Some(name), Some(price)) = (name, self.price) else {
            return Err(AppError::BadRequest(
                "Name and price are required".to_string(),
            ));
        };

        Ok(NewJuice {
            name,
            description: self.description,
            price,
            category: self.category,
            in_stock: self.in_stock,
            image_url: self.image_url,
        })
    }
}

/// Request body for updating a juice. Absent fields keep their value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJuiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
}

impl From<UpdateJuiceRequest> for JuiceUpdate {
    fn from(req: UpdateJuiceRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            in_stock: req.in_stock,
            image_url: req.image_url,
        }
    }
}

/// List juices, optionally filtered by category and/or search text.
///
/// With both filters the category is applied to the search results.
///
/// # Errors
///
/// Returns an internal error if the store is unavailable.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<JuiceListQuery>,
) -> Result<Json<Vec<Juice>>> {
    let repo = state.store().juices();
    let juices = match (query.q.as_deref(), query.category.as_deref()) {
        (Some(q), Some(category)) => repo
            .search(q)?
            .into_iter()
            .filter(|juice| juice.category == category)
            .collect(),
        (Some(q), None) => repo.search(q)?,
        (None, Some(category)) => repo.by_category(category)?,
        (None, None) => repo.list()?,
    };
    Ok(Json(juices))
}

/// Show one juice.
///
/// # Errors
///
/// Returns 404 if the juice does not exist.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Juice>> {
    let juice = state.store().juices().get(&JuiceId::new(id))?;
    Ok(Json(juice))
}

/// Create a juice.
///
/// # Errors
///
/// Returns 400 if `name` or `price` is missing or the body is not valid JSON.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateJuiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Juice>)> {
    let Json(body) = payload?;
    let juice = state.store().juices().create(body.into_new_juice()?)?;
    Ok((StatusCode::CREATED, Json(juice)))
}

/// Update the fields present in the body.
///
/// # Errors
///
/// Returns 404 if the juice does not exist, 400 for an invalid body.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateJuiceRequest>, JsonRejection>,
) -> Result<Json<Juice>> {
    let Json(body) = payload?;
    let juice = state
        .store()
        .juices()
        .update(&JuiceId::new(id), body.into())?;
    Ok(Json(juice))
}

/// Delete a juice.
///
/// # Errors
///
/// Returns 404 if the juice does not exist.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>> {
    state.store().juices().delete(&JuiceId::new(id))?;
    Ok(Json(MessageBody::new("Juice deleted successfully")))
}
