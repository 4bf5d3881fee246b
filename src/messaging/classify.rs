use serde::Serialize;

use super::models::PushMessage;

/// Value of `data.type` that marks a severe weather message.
pub const SEVERE_WEATHER_TYPE: &str = "severe_weather";

/// Which notification path a message takes. Decided once per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Normal,
    Severe,
}

pub fn classify(message: &PushMessage) -> AlertKind {
    match message.data_value("type") {
        Some(SEVERE_WEATHER_TYPE) => AlertKind::Severe,
        _ => AlertKind::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::NotificationBlock;

    fn message(kind: Option<&str>, with_block: bool) -> PushMessage {
        let mut msg = PushMessage::default();
        if let Some(kind) = kind {
            msg.data.insert("type".to_string(), kind.to_string());
        }
        if with_block {
            msg.notification = Some(NotificationBlock {
                title: Some("title".to_string()),
                body: None,
            });
        }
        msg
    }

    #[test]
    fn it_classifies_severe_with_or_without_block() {
        assert_eq!(classify(&message(Some("severe_weather"), true)), AlertKind::Severe);
        assert_eq!(classify(&message(Some("severe_weather"), false)), AlertKind::Severe);
    }

    #[test]
    fn it_classifies_everything_else_as_normal() {
        assert_eq!(classify(&message(None, false)), AlertKind::Normal);
        assert_eq!(classify(&message(None, true)), AlertKind::Normal);
        assert_eq!(classify(&message(Some("rain"), true)), AlertKind::Normal);
        // Exact match only
        assert_eq!(classify(&message(Some("SEVERE_WEATHER"), false)), AlertKind::Normal);
        assert_eq!(classify(&message(Some(""), false)), AlertKind::Normal);
    }
}
