//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use tempfile::TempDir;
use tower::util::ServiceExt;

use weatherpush::api::AppState;
use weatherpush::api::app;
use weatherpush::core::AppConfig;
use weatherpush::core::db::{async_db, initialize_db};

/// Creates a fresh temporary storage directory. It is removed when the
/// returned guard is dropped.
pub fn test_storage_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("weatherpush-test")
        .tempdir()
        .expect("Failed to create temp dir")
}

pub fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        storage_path: dir.display().to_string(),
        db_path: dir.join("db").display().to_string(),
        vapid_key_path: None,
        registration_url: None,
        auth_token: None,
        device_name: String::from("test-device"),
    }
}

/// Router under test plus the temp dir holding its db, so the directory
/// lives exactly as long as the app.
pub struct TestApp {
    router: Router,
    dir: TempDir,
}

impl TestApp {
    pub fn storage_path(&self) -> &Path {
        self.dir.path()
    }
}

impl Deref for TestApp {
    type Target = Router;

    fn deref(&self) -> &Router {
        &self.router
    }
}

/// Creates a test application router backed by a new sqlite db in a
/// temporary directory.
pub async fn test_app() -> TestApp {
    let dir = test_storage_dir();
    let config = test_config(dir.path());
    fs::create_dir_all(&config.db_path).expect("Failed to create db directory");

    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let app_state = AppState::new(db, config);
    TestApp {
        router: app(Arc::new(RwLock::new(app_state))),
        dir,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not json")
}

/// POST a JSON body to `uri`.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn request(app: &Router, method: &str, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method(method)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}
