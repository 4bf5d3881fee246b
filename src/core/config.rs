use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    // Web push delivery is only enabled when a VAPID key is configured
    pub vapid_key_path: Option<String>,
    // Where rotated registration tokens are forwarded, if anywhere
    pub registration_url: Option<String>,
    // Bearer token of the logged in user, required by the registration endpoint
    pub auth_token: Option<String>,
    pub device_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("WEATHERPUSH_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let vapid_key_path = env::var("WEATHERPUSH_VAPID_KEY_PATH").ok();
        let registration_url = env::var("WEATHERPUSH_REGISTRATION_URL").ok();
        let auth_token = env::var("WEATHERPUSH_AUTH_TOKEN").ok();
        let device_name =
            env::var("WEATHERPUSH_DEVICE_NAME").unwrap_or_else(|_| "weatherpush".to_string());

        Self {
            storage_path,
            db_path,
            vapid_key_path,
            registration_url,
            auth_token,
            device_name,
        }
    }
}
