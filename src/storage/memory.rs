use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::KeyValueStore;

#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<(String, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let values = self.values.read().unwrap();
        Ok(values
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
