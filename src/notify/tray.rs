use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::channel::ChannelDescriptor;
use super::models::{LaunchData, LocalNotification};
use super::sink::NotificationSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayError {
    NotFound(i32),
    // Ongoing notifications need a tap or an action to go away
    Ongoing(i32),
    UnknownAction { id: i32, action: String },
}

impl fmt::Display for TrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrayError::NotFound(id) => write!(f, "No active notification with id {}", id),
            TrayError::Ongoing(id) => write!(f, "Notification {} is ongoing and can't be dismissed", id),
            TrayError::UnknownAction { id, action } => {
                write!(f, "Notification {} has no action {:?}", id, action)
            }
        }
    }
}

impl std::error::Error for TrayError {}

/// In-process notification manager.
///
/// Keeps the declared channels and the active notification per slot, and
/// implements the user interactions a notification shade offers.
#[derive(Default)]
pub struct NotificationTray {
    channels: RwLock<BTreeMap<&'static str, ChannelDescriptor>>,
    active: RwLock<BTreeMap<i32, LocalNotification>>,
}

impl NotificationTray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> Vec<ChannelDescriptor> {
        self.channels.read().unwrap().values().cloned().collect()
    }

    /// Active notifications ordered by slot.
    pub fn active(&self) -> Vec<LocalNotification> {
        self.active.read().unwrap().values().cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<LocalNotification> {
        self.active.read().unwrap().get(&id).cloned()
    }

    /// Open the notification. Auto-cancel notifications are removed.
    pub fn tap(&self, id: i32) -> Result<LaunchData, TrayError> {
        let mut active = self.active.write().unwrap();
        let notification = active.get(&id).ok_or(TrayError::NotFound(id))?;
        let launch = notification.launch.clone();
        if notification.auto_cancel {
            active.remove(&id);
        }
        tracing::debug!("Notification {} tapped", id);
        Ok(launch)
    }

    /// Run one of the notification's actions. Every action opens the main
    /// view with the notification's launch data and clears the notification.
    pub fn invoke_action(&self, id: i32, action: &str) -> Result<LaunchData, TrayError> {
        let mut active = self.active.write().unwrap();
        let notification = active.get(&id).ok_or(TrayError::NotFound(id))?;
        if !notification.has_action(action) {
            return Err(TrayError::UnknownAction {
                id,
                action: action.to_string(),
            });
        }
        let launch = notification.launch.clone();
        active.remove(&id);
        tracing::debug!("Notification {} action {} invoked", id, action);
        Ok(launch)
    }

    /// Swipe the notification away.
    pub fn dismiss(&self, id: i32) -> Result<(), TrayError> {
        let mut active = self.active.write().unwrap();
        let notification = active.get(&id).ok_or(TrayError::NotFound(id))?;
        if notification.ongoing {
            return Err(TrayError::Ongoing(id));
        }
        active.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for NotificationTray {
    async fn create_channel(&self, channel: &ChannelDescriptor) -> Result<()> {
        let mut channels = self.channels.write().unwrap();
        if !channels.contains_key(channel.id) {
            tracing::debug!("Creating notification channel {}", channel.id);
            channels.insert(channel.id, channel.clone());
        }
        Ok(())
    }

    async fn post(&self, notification: &LocalNotification) -> Result<()> {
        let mut active = self.active.write().unwrap();
        if active
            .insert(notification.id, notification.clone())
            .is_some()
        {
            tracing::debug!("Replaced notification in slot {}", notification.id);
        }
        Ok(())
    }
}
