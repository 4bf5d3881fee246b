use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tokio::sync::broadcast;

use super::classify::{AlertKind, classify};
use super::models::PushMessage;
use crate::notify::{LocalNotification, NotificationSink, channel_for, render};
use crate::storage::KeyValueStore;
use crate::token::{TokenRotated, load_token, persist_token};

const TOKEN_EVENT_CAPACITY: usize = 16;

/// Entry points the push transport calls into.
///
/// The notification sink and key-value store are injected so the same
/// service runs against the in-process tray, web push or test fakes.
pub struct MessagingService {
    sink: Arc<dyn NotificationSink>,
    store: Arc<dyn KeyValueStore>,
    token_events: broadcast::Sender<TokenRotated>,
    // Channels declared during this process lifetime
    declared_channels: Mutex<HashSet<&'static str>>,
}

impl MessagingService {
    pub fn new(sink: Arc<dyn NotificationSink>, store: Arc<dyn KeyValueStore>) -> Self {
        let (token_events, _) = broadcast::channel(TOKEN_EVENT_CAPACITY);
        Self {
            sink,
            store,
            token_events,
            declared_channels: Mutex::new(HashSet::new()),
        }
    }

    /// Subscribe to `TokenRotated` events, e.g. for a sync service.
    pub fn subscribe_token_events(&self) -> broadcast::Receiver<TokenRotated> {
        self.token_events.subscribe()
    }

    /// Classify and render a received message, then post it.
    pub async fn on_message_received(
        &self,
        message: &PushMessage,
    ) -> Result<(AlertKind, LocalNotification)> {
        let kind = classify(message);
        let weather_data = message.weather_data();
        match (kind, weather_data) {
            (AlertKind::Severe, None) => {
                tracing::warn!("Severe weather message without weather_data")
            }
            (AlertKind::Normal, None) => tracing::debug!("Message without weather_data"),
            _ => {}
        }

        let notification = render(kind, message.title(), message.body(), weather_data);
        self.ensure_channel(kind).await?;
        self.sink.post(&notification).await?;
        tracing::info!(
            "Posted {:?} notification to slot {}",
            kind,
            notification.id
        );

        Ok((kind, notification))
    }

    /// Store a newly issued token and announce it.
    pub async fn on_new_token(&self, token: &str) -> Result<()> {
        persist_token(self.store.as_ref(), token).await?;
        tracing::info!("Registration token refreshed");

        // Nobody listening is fine, forwarding is optional
        if self
            .token_events
            .send(TokenRotated {
                token: token.to_string(),
            })
            .is_err()
        {
            tracing::debug!("No token sync subscribers");
        }
        Ok(())
    }

    pub async fn stored_token(&self) -> Result<Option<String>> {
        load_token(self.store.as_ref()).await
    }

    async fn ensure_channel(&self, kind: AlertKind) -> Result<()> {
        if !self.sink.requires_channels() {
            return Ok(());
        }
        let channel = channel_for(kind);
        let declared = self.declared_channels.lock().unwrap().contains(channel.id);
        if declared {
            return Ok(());
        }
        self.sink.create_channel(channel).await?;
        self.declared_channels.lock().unwrap().insert(channel.id);
        Ok(())
    }
}
