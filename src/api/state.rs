use std::sync::Arc;

use tokio_rusqlite::Connection;

use crate::core::AppConfig;
use crate::messaging::MessagingService;
use crate::notify::{MultiSink, NotificationSink, NotificationTray, WebPushSink};
use crate::storage::SqliteStore;

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    // Notifications posted by this process, as the user would see them
    pub tray: Arc<NotificationTray>,
    pub service: Arc<MessagingService>,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        let tray = Arc::new(NotificationTray::new());

        let mut sinks: Vec<Arc<dyn NotificationSink>> = vec![tray.clone()];
        if let Some(vapid_key_path) = &config.vapid_key_path {
            sinks.push(Arc::new(WebPushSink::new(db.clone(), vapid_key_path.clone())));
        }

        let store = Arc::new(SqliteStore::new(db.clone()));
        let service = Arc::new(MessagingService::new(
            Arc::new(MultiSink::new(sinks)),
            store,
        ));

        Self {
            db,
            config,
            tray,
            service,
        }
    }
}
