//! Wishlist endpoints - add, list, purchase, dismiss, delete.

use crate::{
    api::{AppState, UserId},
    core::wishlist,
    entities::wishlist_item,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Optional body for the dismiss action.
#[derive(Debug, Default, Deserialize)]
pub struct DismissBody {
    /// Why the user let the item go
    #[serde(default)]
    pub reason: Option<String>,
}

/// `GET /api/wishlist` - the user's wishlist, newest first.
///
/// Runs the per-user cooldown check first, so a fresh read never shows an
/// item as cooling down past its end.
pub async fn list(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<wishlist_item::Model>>> {
    wishlist::release_expired(&state.db, Some(&user_id), chrono::Utc::now()).await?;
    let items = wishlist::get_wishlist(&state.db, &user_id).await?;
    Ok(Json(items))
}

/// `POST /api/wishlist` - add an item, starting its cooldown.
pub async fn add(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(input): Json<wishlist::NewWishlistItem>,
) -> Result<(StatusCode, Json<wishlist_item::Model>)> {
    let item = wishlist::add_item(&state.db, &user_id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `POST /api/wishlist/{id}/purchase` - convert a ready item into a purchase.
pub async fn purchase(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
) -> Result<Json<wishlist::PurchaseOutcome>> {
    let outcome = wishlist::purchase_item(&state.db, &user_id, id).await?;
    Ok(Json(outcome))
}

/// `POST /api/wishlist/{id}/dismiss` - dismiss a ready item.
pub async fn dismiss(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
    body: Option<Json<DismissBody>>,
) -> Result<Json<wishlist::DismissOutcome>> {
    let reason = body.and_then(|Json(body)| body.reason);
    let outcome = wishlist::dismiss_item(&state.db, &user_id, id, reason).await?;
    Ok(Json(outcome))
}

/// `DELETE /api/wishlist/{id}` - remove an item outright, in any status.
pub async fn remove(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    wishlist::delete_item(&state.db, &user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
