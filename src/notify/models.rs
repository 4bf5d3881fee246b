use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PushSubscription {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Default,
    High,
}

/// Delivery category hint for the notification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Alarm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

/// Extras handed to the main view when a notification is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_data: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub severe_weather: bool,
}

/// A fully rendered notification, ready to be posted to a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalNotification {
    // Slot id. Posting to an occupied slot replaces what is there.
    pub id: i32,
    pub channel_id: String,
    pub title: String,
    pub body: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub sound: String,
    // Ongoing notifications can't be swiped away
    pub ongoing: bool,
    pub auto_cancel: bool,
    pub actions: Vec<NotificationAction>,
    pub launch: LaunchData,
    pub posted_at: DateTime<Utc>,
}

impl LocalNotification {
    pub fn has_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a.action == action)
    }
}

#[derive(Serialize, Clone)]
/// Application specific data the service worker reads from the
/// notification event.
struct PushNotificationData {
    // The URL to open when the notification is clicked
    url: String,
    #[serde(flatten)]
    launch: LaunchData,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PushNotificationPayload {
    pub title: String,
    pub body: String,
    pub actions: Vec<NotificationAction>,
    // When a tag is set, sending new notifications with the same tag
    // will update the user's notification if they have not interacted
    // with it yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub require_interaction: bool,
    pub sound: String,
    data: PushNotificationData,
}

impl From<&LocalNotification> for PushNotificationPayload {
    fn from(notification: &LocalNotification) -> Self {
        let url = if notification.launch.severe_weather {
            "/weather"
        } else {
            "/"
        };
        Self {
            title: notification.title.clone(),
            body: notification.body.clone(),
            actions: notification.actions.clone(),
            tag: Some(format!("weather-notification-{}", notification.id)),
            require_interaction: notification.ongoing,
            sound: notification.sound.clone(),
            data: PushNotificationData {
                url: url.to_string(),
                launch: notification.launch.clone(),
            },
        }
    }
}
