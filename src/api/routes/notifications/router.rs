//! Router for the notification tray API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
};
use serde_json::Value;

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn list_notifications(State(state): State<SharedState>) -> Json<public::NotificationsResponse> {
    let notifications = state.read().unwrap().tray.active();
    Json(public::NotificationsResponse { notifications })
}

// Open a notification, returning the extras the main view launches with
async fn tap_notification(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<public::LaunchData>, crate::api::public::ApiError> {
    let launch = state.read().unwrap().tray.tap(id)?;
    Ok(Json(launch))
}

async fn invoke_action(
    State(state): State<SharedState>,
    Path((id, action)): Path<(i32, String)>,
) -> Result<Json<public::LaunchData>, crate::api::public::ApiError> {
    let launch = state.read().unwrap().tray.invoke_action(id, &action)?;
    Ok(Json(launch))
}

// Swipe away. Ongoing notifications refuse with 409.
async fn dismiss_notification(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    state.read().unwrap().tray.dismiss(id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn list_channels(State(state): State<SharedState>) -> Json<public::ChannelsResponse> {
    let channels = state.read().unwrap().tray.channels();
    Json(public::ChannelsResponse { channels })
}

/// Create the notifications router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(list_notifications))
        .route("/{id}", axum::routing::delete(dismiss_notification))
        .route("/{id}/tap", axum::routing::post(tap_notification))
        .route("/{id}/actions/{action}", axum::routing::post(invoke_action))
}

/// Create the channels router
pub fn channels_router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(list_channels))
}
