//! Notification sink trait for delivering rendered notifications.
//!
//! The sink abstracts over whatever actually shows the notification:
//! - `NotificationTray`: in-process notification manager
//! - `WebPushSink`: browser subscriptions via web push
//! - `LoggingSink`: tracing output only

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::channel::ChannelDescriptor;
use super::models::LocalNotification;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Whether channels must be declared before posting to them.
    fn requires_channels(&self) -> bool {
        true
    }

    /// Declare a channel. Declaring an existing channel is a no-op.
    async fn create_channel(&self, channel: &ChannelDescriptor) -> Result<()>;

    /// Show a notification, replacing whatever occupies the same slot.
    async fn post(&self, notification: &LocalNotification) -> Result<()>;
}

/// A sink that only logs notifications.
///
/// Used by the `receive` command and handy when debugging payloads.
pub struct LoggingSink;

#[async_trait]
impl NotificationSink for LoggingSink {
    fn requires_channels(&self) -> bool {
        false
    }

    async fn create_channel(&self, channel: &ChannelDescriptor) -> Result<()> {
        tracing::debug!("Channel declared: {}", channel.id);
        Ok(())
    }

    async fn post(&self, notification: &LocalNotification) -> Result<()> {
        tracing::info!(
            "Notification: id={} channel={} title={:?} ongoing={}",
            notification.id,
            notification.channel_id,
            notification.title,
            notification.ongoing
        );
        Ok(())
    }
}

/// Posts to several sinks in order. The first failure stops delivery.
pub struct MultiSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Arc<dyn NotificationSink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl NotificationSink for MultiSink {
    fn requires_channels(&self) -> bool {
        self.sinks.iter().any(|s| s.requires_channels())
    }

    async fn create_channel(&self, channel: &ChannelDescriptor) -> Result<()> {
        for sink in self.sinks.iter().filter(|s| s.requires_channels()) {
            sink.create_channel(channel).await?;
        }
        Ok(())
    }

    async fn post(&self, notification: &LocalNotification) -> Result<()> {
        for sink in self.sinks.iter() {
            sink.post(notification).await?;
        }
        Ok(())
    }
}
