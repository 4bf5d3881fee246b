use std::sync::Arc;

use anyhow::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::TokenRotated;
use crate::core::AppConfig;

/// Forwards rotated tokens to the application server.
#[async_trait]
pub trait TokenSync: Send + Sync {
    async fn sync(&self, token: &str) -> Result<(), Error>;
}

#[derive(Serialize)]
struct DeviceInfo<'a> {
    name: &'a str,
    platform: &'a str,
}

#[derive(Serialize)]
struct RegisterTokenRequest<'a> {
    token: &'a str,
    device_info: DeviceInfo<'a>,
    subscribe_topics: &'a [&'a str],
}

/// Topics the device subscribes to when registering its token.
pub const SUBSCRIBE_TOPICS: &[&str] = &["weather_alerts", "severe_weather"];

/// POSTs the token as JSON to a registration endpoint on behalf of a
/// logged in user. One attempt per token, no retries.
pub struct HttpTokenSync {
    endpoint: String,
    device_name: String,
    // Bearer token of the user the device belongs to
    auth_token: String,
    client: reqwest::Client,
}

impl HttpTokenSync {
    pub fn new(endpoint: &str, device_name: &str, auth_token: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            device_name: device_name.to_string(),
            auth_token: auth_token.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build from config. The registration endpoint only accepts logged in
    /// users, so both a URL and an auth token are required.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let url = config.registration_url.as_deref()?;
        let Some(auth_token) = config.auth_token.as_deref() else {
            tracing::warn!("WEATHERPUSH_AUTH_TOKEN not set, registration tokens won't be forwarded");
            return None;
        };
        Some(Self::new(url, &config.device_name, auth_token))
    }
}

#[async_trait]
impl TokenSync for HttpTokenSync {
    async fn sync(&self, token: &str) -> Result<(), Error> {
        let body = RegisterTokenRequest {
            token,
            device_info: DeviceInfo {
                name: &self.device_name,
                platform: std::env::consts::OS,
            },
            subscribe_topics: SUBSCRIBE_TOPICS,
        };
        self.client
            .post(self.endpoint.as_str())
            .bearer_auth(&self.auth_token)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Consume rotation events until the sender side is dropped.
pub fn spawn_token_sync(
    mut events: broadcast::Receiver<TokenRotated>,
    sync: Arc<dyn TokenSync>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(TokenRotated { token }) => match sync.sync(&token).await {
                    Ok(()) => tracing::info!("Registration token synced"),
                    Err(err) => tracing::error!("Failed to sync registration token: {}", err),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Token sync lagged, skipped {} rotations", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
