use anyhow::{Error, Result};
use rusqlite::Connection;

/// Open the async sqlite connection stored under `db_dir`.
pub async fn async_db(db_dir: &str) -> Result<tokio_rusqlite::Connection, Error> {
    let path = format!("{}/weatherpush.sqlite", db_dir);
    let db = tokio_rusqlite::Connection::open(path).await?;
    Ok(db)
}

/// Create every table the service needs. Safe to run repeatedly.
pub fn initialize_db(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r"
        BEGIN;

        CREATE TABLE IF NOT EXISTS kv_store (
            namespace TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (namespace, key)
        );

        CREATE TABLE IF NOT EXISTS push_subscription (
            endpoint TEXT PRIMARY KEY,
            p256dh TEXT NOT NULL,
            auth TEXT NOT NULL
        );

        COMMIT;
        ",
    )
}
