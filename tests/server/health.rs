use crate::helpers::spawn_app;

#[tokio::test]
async fn health_reports_ok() {
    let app = spawn_app().await;

    let response = reqwest::get(app.api_url("/health"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = spawn_app().await;
    let response = reqwest::get(app.api_url("/nope")).await.unwrap();
    assert_eq!(response.status(), 404);
}
