use serde::Serialize;

use crate::messaging::AlertKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Default,
    High,
}

/// A notification category declared with the notification service before
/// anything is posted to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: Importance,
    pub lights: bool,
    // Empty means the platform default vibration
    pub vibration_pattern: &'static [u64],
}

pub const WEATHER_ALERTS_CHANNEL: ChannelDescriptor = ChannelDescriptor {
    id: "weather_alerts",
    name: "Weather Alerts",
    description: "General weather alerts",
    importance: Importance::Default,
    lights: false,
    vibration_pattern: &[],
};

pub const SEVERE_WEATHER_CHANNEL: ChannelDescriptor = ChannelDescriptor {
    id: "severe_weather",
    name: "Severe Weather",
    description: "Severe weather situation alerts",
    importance: Importance::High,
    lights: true,
    vibration_pattern: &[1000, 1000, 1000, 1000, 1000],
};

pub fn channel_for(kind: AlertKind) -> &'static ChannelDescriptor {
    match kind {
        AlertKind::Normal => &WEATHER_ALERTS_CHANNEL,
        AlertKind::Severe => &SEVERE_WEATHER_CHANNEL,
    }
}
