//! Purchase history endpoints - direct logging and listing.

use crate::{
    api::{AppState, UserId},
    core::purchases,
    entities::purchase,
    errors::Result,
};
use axum::{Json, extract::State, http::StatusCode};

/// `GET /api/purchases` - the user's purchase history, newest first.
pub async fn list(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<purchase::Model>>> {
    let items = purchases::get_purchases(&state.db, &user_id).await?;
    Ok(Json(items))
}

/// `POST /api/purchases` - log a purchase directly, outside the wishlist
/// lifecycle.
pub async fn add(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(input): Json<purchases::NewPurchase>,
) -> Result<(StatusCode, Json<purchase::Model>)> {
    let purchase = purchases::log_purchase(&state.db, &user_id, input).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}
