//! Registration token persistence and rotation events.

mod sync;

pub use sync::{HttpTokenSync, SUBSCRIBE_TOPICS, TokenSync, spawn_token_sync};

use anyhow::Result;

use crate::storage::KeyValueStore;

pub const TOKEN_NAMESPACE: &str = "FCM";
pub const TOKEN_KEY: &str = "token";

/// Emitted after a new token has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRotated {
    pub token: String,
}

pub async fn persist_token(store: &dyn KeyValueStore, token: &str) -> Result<()> {
    store.put(TOKEN_NAMESPACE, TOKEN_KEY, token).await
}

pub async fn load_token(store: &dyn KeyValueStore) -> Result<Option<String>> {
    store.get(TOKEN_NAMESPACE, TOKEN_KEY).await
}
