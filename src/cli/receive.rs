use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

use crate::core::logging;
use crate::messaging::{MessagingService, PushMessage};
use crate::notify::LoggingSink;
use crate::storage::MemoryStore;

pub async fn run(file: Option<PathBuf>) -> Result<()> {
    logging::init(&format!("{}=debug", env!("CARGO_CRATE_NAME")));

    let raw = match file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };
    let message: PushMessage = serde_json::from_str(&raw)?;

    // Nothing is persisted when rendering a single message
    let service = MessagingService::new(Arc::new(LoggingSink), Arc::new(MemoryStore::new()));
    let (_, notification) = service.on_message_received(&message).await?;

    println!("{}", serde_json::to_string_pretty(&notification)?);
    Ok(())
}
