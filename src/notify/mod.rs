mod channel;
pub mod db;
mod models;
mod render;
mod sink;
mod tray;
mod webpush;

pub use channel::{
    ChannelDescriptor, Importance, SEVERE_WEATHER_CHANNEL, WEATHER_ALERTS_CHANNEL, channel_for,
};
pub use db::*;
pub use models::*;
pub use render::{
    NORMAL_NOTIFICATION_ID, SEVERE_NOTIFICATION_ID, VIEW_DETAILS_ACTION, default_body,
    default_title, render, slot_for,
};
pub use sink::{LoggingSink, MultiSink, NotificationSink};
pub use tray::{NotificationTray, TrayError};
pub use webpush::{WebPushSink, broadcast_push_notification, send_push_notification};
