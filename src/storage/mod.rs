//! Flat key-value storage for small pieces of device state.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Write `value`, overwriting any previous value under the same key.
    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()>;
}
