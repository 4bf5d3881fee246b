//! Router for the registration token API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};
use serde_json::Value;

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn token_get(
    State(state): State<SharedState>,
) -> Result<Json<public::TokenResponse>, crate::api::public::ApiError> {
    let service = state.read().unwrap().service.clone();
    let token = service.stored_token().await?;
    Ok(Json(public::TokenResponse { token }))
}

// Issued or rotated by the push transport
async fn token_set(
    State(state): State<SharedState>,
    Json(data): Json<public::TokenRequest>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    let service = state.read().unwrap().service.clone();
    service.on_new_token(&data.token).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Create the token router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(token_get).post(token_set))
}
