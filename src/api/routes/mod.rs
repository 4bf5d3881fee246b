//! API routes module

pub mod messages;
pub mod notifications;
pub mod push;
pub mod token;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Inbound push messages
        .nest("/messages", messages::router())
        // Notification tray
        .nest("/notifications", notifications::router())
        // Declared notification channels
        .nest("/channels", notifications::channels_router())
        // Registration token
        .nest("/token", token::router())
        // Web push subscriptions
        .nest("/push", push::router())
}
