mod classify;
mod models;
mod service;

pub use classify::{AlertKind, SEVERE_WEATHER_TYPE, classify};
pub use models::{NotificationBlock, PushMessage};
pub use service::MessagingService;
