//! Integration tests for the messages API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_json, post_json, request, test_app};

    /// Tests a message with no notification block and no data
    #[tokio::test]
    async fn it_renders_defaults_for_empty_message() {
        let app = test_app().await;

        let response = post_json(&app, "/api/messages", serde_json::json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["variant"], "normal");
        assert_eq!(body["notification"]["id"], 0);
        assert_eq!(body["notification"]["channel_id"], "weather_alerts");
        assert_eq!(body["notification"]["title"], "Weather Alert");
        assert_eq!(
            body["notification"]["body"],
            "New weather information available"
        );
        assert_eq!(body["notification"]["ongoing"], false);
    }

    /// Tests a severe weather message carrying a notification block
    #[tokio::test]
    async fn it_renders_severe_message() {
        let app = test_app().await;

        let response = post_json(
            &app,
            "/api/messages",
            serde_json::json!({
                "notification": {
                    "title": "Typhoon warning",
                    "body": "Heavy rain and strong wind expected tonight"
                },
                "data": {
                    "type": "severe_weather",
                    "weather_data": "{\"pty\":\"1\",\"pop\":90}"
                }
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["variant"], "severe");
        let notification = &body["notification"];
        assert_eq!(notification["id"], 1);
        assert_eq!(notification["channel_id"], "severe_weather");
        assert_eq!(notification["title"], "Typhoon warning");
        assert_eq!(notification["priority"], "high");
        assert_eq!(notification["category"], "alarm");
        assert_eq!(notification["ongoing"], true);
        assert_eq!(notification["actions"][0]["title"], "View details");
        assert_eq!(notification["launch"]["severe_weather"], true);
        assert_eq!(
            notification["launch"]["weather_data"],
            "{\"pty\":\"1\",\"pop\":90}"
        );
    }

    /// Tests a data-only severe message falls back to the severe defaults
    #[tokio::test]
    async fn it_renders_severe_defaults_without_block() {
        let app = test_app().await;

        let response = post_json(
            &app,
            "/api/messages",
            serde_json::json!({ "data": { "type": "severe_weather" } }),
        )
        .await;

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["variant"], "severe");
        assert_eq!(body["notification"]["title"], "⚠️ Weather Warning");
        assert_eq!(
            body["notification"]["body"],
            "A severe weather situation has occurred"
        );
    }

    /// Tests other message types take the normal path
    #[tokio::test]
    async fn it_treats_other_types_as_normal() {
        let app = test_app().await;

        let response = post_json(
            &app,
            "/api/messages",
            serde_json::json!({
                "notification": { "title": "Rain alert" },
                "data": { "type": "rain_alert" }
            }),
        )
        .await;

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["variant"], "normal");
        assert_eq!(body["notification"]["title"], "Rain alert");
        assert!(body["notification"]["launch"].get("severe_weather").is_none());
    }

    /// Tests invalid json is rejected
    #[tokio::test]
    async fn it_returns_400_for_invalid_json() {
        let app = test_app().await;

        let response = app.clone()
            .oneshot(
                Request::builder()
                    .uri("/api/messages")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests data values must be strings
    #[tokio::test]
    async fn it_returns_422_for_non_string_data() {
        let app = test_app().await;

        let response = post_json(
            &app,
            "/api/messages",
            serde_json::json!({ "data": { "type": 1 } }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Tests messages endpoint returns 405 for GET requests
    #[tokio::test]
    async fn it_returns_405_for_get() {
        let app = test_app().await;

        let response = request(&app, "GET", "/api/messages").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
