//! Router for the push API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse};

use super::public;
use crate::api::state::AppState;
use crate::notify::{PushSubscription, upsert_notification_subscription};

type SharedState = Arc<RwLock<AppState>>;

// Register a browser for web push delivery of weather notifications
async fn push_subscription(
    State(state): State<SharedState>,
    Json(subscription): Json<public::PushSubscriptionRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let (Some(p256dh), Some(auth)) = (
        subscription.keys.get("p256dh").cloned(),
        subscription.keys.get("auth").cloned(),
    ) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Subscription keys require p256dh and auth"})),
        ));
    };

    let db = state.read().unwrap().db.clone();
    upsert_notification_subscription(
        &db,
        PushSubscription {
            endpoint: subscription.endpoint,
            p256dh,
            auth,
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(serde_json::json!({"success": true}))))
}

/// Create the push router
pub fn router() -> Router<SharedState> {
    Router::new().route("/subscribe", axum::routing::post(push_subscription))
}
