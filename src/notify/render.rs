//! Turns a classified message into a [`LocalNotification`].

use chrono::Utc;

use super::channel::channel_for;
use super::models::{Category, LaunchData, LocalNotification, NotificationAction, Priority};
use crate::messaging::AlertKind;

pub const NORMAL_NOTIFICATION_ID: i32 = 0;
pub const SEVERE_NOTIFICATION_ID: i32 = 1;

pub const VIEW_DETAILS_ACTION: &str = "view_details";

const NORMAL_SOUND: &str = "/sounds/notification.mp3";
const SEVERE_SOUND: &str = "/sounds/alert.mp3";

pub fn default_title(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Normal => "Weather Alert",
        AlertKind::Severe => "⚠️ Weather Warning",
    }
}

pub fn default_body(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Normal => "New weather information available",
        AlertKind::Severe => "A severe weather situation has occurred",
    }
}

pub fn slot_for(kind: AlertKind) -> i32 {
    match kind {
        AlertKind::Normal => NORMAL_NOTIFICATION_ID,
        AlertKind::Severe => SEVERE_NOTIFICATION_ID,
    }
}

pub fn render(
    kind: AlertKind,
    title: Option<&str>,
    body: Option<&str>,
    weather_data: Option<&str>,
) -> LocalNotification {
    let channel = channel_for(kind);
    let title = title.unwrap_or(default_title(kind)).to_string();
    let body = body.unwrap_or(default_body(kind)).to_string();
    let weather_data = weather_data.map(str::to_string);
    let id = slot_for(kind);

    match kind {
        AlertKind::Normal => LocalNotification {
            id,
            channel_id: channel.id.to_string(),
            title,
            body,
            priority: Priority::Default,
            category: None,
            sound: NORMAL_SOUND.to_string(),
            ongoing: false,
            auto_cancel: true,
            actions: Vec::new(),
            launch: LaunchData {
                weather_data,
                severe_weather: false,
            },
            posted_at: Utc::now(),
        },
        AlertKind::Severe => LocalNotification {
            id,
            channel_id: channel.id.to_string(),
            title,
            body,
            priority: Priority::High,
            category: Some(Category::Alarm),
            sound: SEVERE_SOUND.to_string(),
            ongoing: true,
            auto_cancel: true,
            actions: vec![NotificationAction {
                action: VIEW_DETAILS_ACTION.to_string(),
                title: "View details".to_string(),
            }],
            launch: LaunchData {
                weather_data,
                severe_weather: true,
            },
            posted_at: Utc::now(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_renders_normal_defaults() {
        let n = render(AlertKind::Normal, None, None, None);
        assert_eq!(n.id, 0);
        assert_eq!(n.channel_id, "weather_alerts");
        assert_eq!(n.title, "Weather Alert");
        assert_eq!(n.body, "New weather information available");
        assert_eq!(n.priority, Priority::Default);
        assert_eq!(n.category, None);
        assert!(!n.ongoing);
        assert!(n.auto_cancel);
        assert!(n.actions.is_empty());
        assert_eq!(n.launch, LaunchData::default());
    }

    #[test]
    fn it_renders_severe_defaults() {
        let n = render(AlertKind::Severe, None, None, None);
        assert_eq!(n.id, 1);
        assert_eq!(n.channel_id, "severe_weather");
        assert_eq!(n.title, "⚠️ Weather Warning");
        assert_eq!(n.body, "A severe weather situation has occurred");
        assert_eq!(n.priority, Priority::High);
        assert_eq!(n.category, Some(Category::Alarm));
        assert_eq!(n.sound, "/sounds/alert.mp3");
        assert!(n.ongoing);
        assert!(n.has_action(VIEW_DETAILS_ACTION));
        assert!(n.launch.severe_weather);
    }

    #[test]
    fn it_posts_each_kind_to_its_own_slot() {
        for kind in [AlertKind::Normal, AlertKind::Severe] {
            assert_eq!(render(kind, None, None, None).id, slot_for(kind));
        }
        assert_eq!(slot_for(AlertKind::Normal), NORMAL_NOTIFICATION_ID);
        assert_eq!(slot_for(AlertKind::Severe), SEVERE_NOTIFICATION_ID);
    }

    #[test]
    fn it_keeps_provided_fields() {
        let n = render(
            AlertKind::Normal,
            Some("Rain expected"),
            Some("60% chance after 3pm"),
            Some(r#"{"pop":60}"#),
        );
        assert_eq!(n.title, "Rain expected");
        assert_eq!(n.body, "60% chance after 3pm");
        assert_eq!(n.launch.weather_data.as_deref(), Some(r#"{"pop":60}"#));
        assert_ne!(n.sound, "/sounds/alert.mp3");
    }

    #[test]
    fn it_serializes_launch_flag_only_when_severe() {
        let normal = serde_json::to_value(render(AlertKind::Normal, None, None, None)).unwrap();
        assert!(normal["launch"].get("severe_weather").is_none());

        let severe = serde_json::to_value(render(AlertKind::Severe, None, None, Some("x"))).unwrap();
        assert_eq!(severe["launch"]["severe_weather"], true);
        assert_eq!(severe["launch"]["weather_data"], "x");
        assert_eq!(severe["category"], "alarm");
    }
}
