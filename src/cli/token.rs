use anyhow::Result;
use std::sync::Arc;

use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};
use crate::core::logging;
use crate::messaging::MessagingService;
use crate::notify::LoggingSink;
use crate::storage::SqliteStore;
use crate::token::{HttpTokenSync, TokenSync};

pub async fn run(set: Option<String>, config: &AppConfig) -> Result<()> {
    logging::init(&format!("{}=info", env!("CARGO_CRATE_NAME")));

    std::fs::create_dir_all(&config.db_path)?;
    let db = async_db(&config.db_path).await?;
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await?;
    let service = MessagingService::new(Arc::new(LoggingSink), Arc::new(SqliteStore::new(db)));

    match set {
        Some(token) => {
            service.on_new_token(&token).await?;
            // One-shot process, so forward inline instead of via a consumer task
            if let Some(sync) = HttpTokenSync::from_config(config) {
                if let Err(err) = sync.sync(&token).await {
                    tracing::error!("Failed to sync registration token: {}", err);
                }
            }
            println!("Token stored");
        }
        None => match service.stored_token().await? {
            Some(token) => println!("{}", token),
            None => println!("No token stored"),
        },
    }

    Ok(())
}
