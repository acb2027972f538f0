//! ADHD-tax ledger endpoints - add, list, delete.

use crate::{
    api::{AppState, UserId},
    core::adhd_tax,
    entities::adhd_tax_item,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// `GET /api/adhd-tax` - the user's ledger, newest first.
pub async fn list(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<adhd_tax_item::Model>>> {
    let items = adhd_tax::get_items(&state.db, &user_id).await?;
    Ok(Json(items))
}

/// `POST /api/adhd-tax` - record an avoidable cost.
pub async fn add(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(input): Json<adhd_tax::NewAdhdTaxItem>,
) -> Result<(StatusCode, Json<adhd_tax_item::Model>)> {
    let item = adhd_tax::add_item(&state.db, &user_id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `DELETE /api/adhd-tax/{id}` - remove an entry, reversing its contribution
/// to the running total.
pub async fn remove(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    adhd_tax::delete_item(&state.db, &user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
