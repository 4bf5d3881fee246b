use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display block of a push message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationBlock {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A message as delivered by the push transport. Lives for one receive
/// callback and is never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PushMessage {
    #[serde(default)]
    pub notification: Option<NotificationBlock>,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl PushMessage {
    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Title from the display block, falling back to `data.title` for
    /// data-only messages.
    pub fn title(&self) -> Option<&str> {
        self.notification
            .as_ref()
            .and_then(|n| n.title.as_deref())
            .or_else(|| self.data_value("title"))
    }

    pub fn body(&self) -> Option<&str> {
        self.notification
            .as_ref()
            .and_then(|n| n.body.as_deref())
            .or_else(|| self.data_value("body"))
    }

    pub fn weather_data(&self) -> Option<&str> {
        self.data_value("weather_data")
    }
}
