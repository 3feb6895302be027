use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_report_invalid_without_cookie() {
    let app = TestApp::new().await;

    let response = app.get_session().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "valid": false }));
}

#[tokio::test]
async fn should_report_username_after_login() {
    let app = TestApp::new().await;

    app.post_login(&[("username", "alice"), ("password", "wonderland")])
        .await;

    let body: Value = app.get_session().await.json().await.unwrap();
    assert_eq!(body, json!({ "valid": true, "username": "alice" }));
}

#[tokio::test]
async fn should_ignore_forged_session_cookie() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/session", app.address))
        .header("cookie", "session_id=not-a-session")
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "valid": false }));
}
