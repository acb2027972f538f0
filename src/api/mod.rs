//! HTTP API layer - the mutation surface over the domain engine.
//!
//! A thin axum router: handlers validate nothing themselves beyond JSON
//! shape; every rule lives in `core`. The caller's identity arrives in the
//! `x-user-id` header (the identity provider itself is an external
//! collaborator). Errors map onto `{ "error": message }` bodies with
//! statuses matching the failure class.

/// ADHD-tax ledger endpoints
pub mod adhd_tax;
/// Insight chat endpoint
pub mod chat;
/// Profile and settings endpoints
pub mod profile;
/// Purchase history endpoints
pub mod purchases;
/// Reward ledger and badge endpoints
pub mod rewards;
/// Wishlist lifecycle endpoints
pub mod wishlist;

use crate::{ai::InsightClient, errors::Error};
use axum::{
    Json, Router,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all domain operations
    pub db: DatabaseConnection,
    /// Upstream completion client; `None` when no API key is configured
    pub insight: Option<InsightClient>,
}

impl AppState {
    /// Creates the shared handler state.
    #[must_use]
    pub const fn new(db: DatabaseConnection, insight: Option<InsightClient>) -> Self {
        Self { db, insight }
    }
}

/// The authenticated user id, extracted from the `x-user-id` header.
pub struct UserId(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
            .ok_or((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Missing x-user-id header" })),
            ))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Config { .. } | Self::InvalidAmount { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::WishlistItemNotFound { .. }
            | Self::TaxItemNotFound { .. }
            | Self::UnknownBadge { .. } => StatusCode::NOT_FOUND,
            Self::NotReadyForReview { .. } => StatusCode::CONFLICT,
            // Pass the upstream status through, like any other proxy.
            Self::InsightUpstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::InsightRequest { .. } => StatusCode::BAD_GATEWAY,
            Self::InsightNotConfigured
            | Self::Database(_)
            | Self::Io(_)
            | Self::EnvVar(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the complete application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/wishlist", get(wishlist::list).post(wishlist::add))
        .route("/api/wishlist/:id/purchase", post(wishlist::purchase))
        .route("/api/wishlist/:id/dismiss", post(wishlist::dismiss))
        .route("/api/wishlist/:id", delete(wishlist::remove))
        .route("/api/purchases", get(purchases::list).post(purchases::add))
        .route("/api/adhd-tax", get(adhd_tax::list).post(adhd_tax::add))
        .route("/api/adhd-tax/:id", delete(adhd_tax::remove))
        .route("/api/rewards", get(rewards::list))
        .route("/api/badges", get(rewards::badges))
        .route("/api/profile", get(profile::get_profile))
        .route("/api/settings", put(profile::update_settings))
        .route("/api/chat", post(chat::chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
