use anyhow::{Error, Result};
use async_trait::async_trait;
use tokio_rusqlite::Connection;
use web_push::{
    ContentEncoding, HyperWebPushClient, SubscriptionInfo, VapidSignatureBuilder, WebPushClient,
    WebPushMessageBuilder,
};

use super::channel::ChannelDescriptor;
use super::db::find_all_notification_subscriptions;
use super::models::{LocalNotification, PushNotificationPayload, PushSubscription};
use super::sink::NotificationSink;

pub async fn send_push_notification(
    vapid_private_pem_path: String,
    endpoint: String,
    p256dh: String,
    auth: String,
    payload: PushNotificationPayload,
) -> Result<(), Error> {
    let subscription_info = SubscriptionInfo::new(endpoint, p256dh, auth);

    // Read the VAPID signing material from the PEM file
    let file = std::fs::File::open(vapid_private_pem_path)?;
    let sig_builder = VapidSignatureBuilder::from_pem(file, &subscription_info)?.build()?;

    let mut builder = WebPushMessageBuilder::new(&subscription_info);
    let content = serde_json::to_string(&payload)?;
    builder.set_payload(ContentEncoding::Aes128Gcm, content.as_bytes());
    builder.set_vapid_signature(sig_builder);
    let message = builder.build()?;

    let client = HyperWebPushClient::new();
    client.send(message).await?;

    Ok(())
}

/// Send to every subscription concurrently. Per-subscription failures are
/// logged and otherwise ignored.
pub async fn broadcast_push_notification(
    subscriptions: Vec<PushSubscription>,
    vapid_key_path: String,
    payload: PushNotificationPayload,
) {
    let mut tasks = tokio::task::JoinSet::new();
    for sub in subscriptions {
        let vapid = vapid_key_path.clone();
        let endpoint = sub.endpoint.clone();
        let payload = payload.clone();
        tasks.spawn(async move {
            let result =
                send_push_notification(vapid, sub.endpoint, sub.p256dh, sub.auth, payload).await;
            (endpoint, result)
        });
    }
    while let Some(res) = tasks.join_next().await {
        match res {
            Ok((endpoint, Err(err))) => {
                tracing::warn!("Web push to {} failed: {:?}", endpoint, err)
            }
            Err(err) => tracing::error!("Web push task failed: {}", err),
            _ => {}
        }
    }
}

/// Delivers notifications to browsers subscribed via web push.
///
/// Browsers have no channel concept. Slot replacement is expressed with the
/// notification tag instead.
pub struct WebPushSink {
    db: Connection,
    vapid_key_path: String,
}

impl WebPushSink {
    pub fn new(db: Connection, vapid_key_path: String) -> Self {
        Self { db, vapid_key_path }
    }
}

#[async_trait]
impl NotificationSink for WebPushSink {
    fn requires_channels(&self) -> bool {
        false
    }

    async fn create_channel(&self, _channel: &ChannelDescriptor) -> Result<()> {
        Ok(())
    }

    async fn post(&self, notification: &LocalNotification) -> Result<()> {
        let subscriptions = find_all_notification_subscriptions(&self.db).await?;
        if subscriptions.is_empty() {
            tracing::debug!("No web push subscriptions, skipping");
            return Ok(());
        }
        let payload = PushNotificationPayload::from(notification);
        broadcast_push_notification(subscriptions, self.vapid_key_path.clone(), payload).await;
        Ok(())
    }
}
