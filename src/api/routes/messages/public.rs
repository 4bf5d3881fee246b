//! Public types for the messages API
use serde::Serialize;

use crate::messaging::AlertKind;
use crate::notify::LocalNotification;

pub use crate::messaging::{NotificationBlock, PushMessage};

#[derive(Serialize)]
pub struct MessageResponse {
    pub variant: AlertKind,
    pub notification: LocalNotification,
}
