use anyhow::Result;
use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use super::KeyValueStore;

/// Key-value store backed by the `kv_store` table.
#[derive(Clone)]
pub struct SqliteStore {
    db: Connection,
}

impl SqliteStore {
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let namespace = namespace.to_string();
        let key = key.to_string();
        let value = self
            .db
            .call(move |conn| {
                let value: Option<String> = conn
                    .query_row(
                        "SELECT value FROM kv_store WHERE namespace = ? AND key = ?",
                        tokio_rusqlite::params![namespace, key],
                        |row| row.get(0),
                    )
                    .optional()?;
                Ok(value)
            })
            .await?;
        Ok(value)
    }

    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let namespace = namespace.to_string();
        let key = key.to_string();
        let value = value.to_string();
        self.db
            .call(move |conn| {
                conn.execute(
                    "REPLACE INTO kv_store(namespace, key, value) VALUES (?, ?, ?)",
                    tokio_rusqlite::params![namespace, key, value],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::db::initialize_db;

    async fn test_store() -> SqliteStore {
        let db = Connection::open_in_memory().await.unwrap();
        db.call(|conn| {
            initialize_db(conn)?;
            Ok(())
        })
        .await
        .unwrap();
        SqliteStore::new(db)
    }

    #[tokio::test]
    async fn it_returns_none_for_missing_key() {
        let store = test_store().await;
        assert_eq!(store.get("FCM", "token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn it_overwrites_values() {
        let store = test_store().await;
        store.put("FCM", "token", "abc123").await.unwrap();
        assert_eq!(
            store.get("FCM", "token").await.unwrap().as_deref(),
            Some("abc123")
        );

        store.put("FCM", "token", "xyz789").await.unwrap();
        assert_eq!(
            store.get("FCM", "token").await.unwrap().as_deref(),
            Some("xyz789")
        );
    }
}
