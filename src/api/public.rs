//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::notify::TrayError;

// Errors

pub struct ApiError(anyhow::Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<TrayError>() {
            Some(TrayError::NotFound(_)) => StatusCode::NOT_FOUND,
            Some(TrayError::Ongoing(_)) => StatusCode::CONFLICT,
            Some(TrayError::UnknownAction { .. }) => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        } else {
            tracing::debug!("{}", self.0);
        }

        let message = if status.is_server_error() {
            format!("Something went wrong: {}", self.0)
        } else {
            self.0.to_string()
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod messages {
    pub use crate::api::routes::messages::public::*;
}

pub mod notifications {
    pub use crate::api::routes::notifications::public::*;
}

pub mod push {
    pub use crate::api::routes::push::public::*;
}

pub mod token {
    pub use crate::api::routes::token::public::*;
}
