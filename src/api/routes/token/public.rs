//! Public types for the token API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: Option<String>,
}
