//! Router for the messages API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

// Deliver a push message as the transport would
async fn receive_message(
    State(state): State<SharedState>,
    Json(message): Json<public::PushMessage>,
) -> Result<Json<public::MessageResponse>, crate::api::public::ApiError> {
    let service = state.read().unwrap().service.clone();
    let (variant, notification) = service.on_message_received(&message).await?;

    Ok(Json(public::MessageResponse {
        variant,
        notification,
    }))
}

/// Create the messages router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(receive_message))
}
