//! Public types for the notifications API
use serde::Serialize;

use crate::notify::{ChannelDescriptor, LocalNotification};

pub use crate::notify::LaunchData;

#[derive(Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<LocalNotification>,
}

#[derive(Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<ChannelDescriptor>,
}
