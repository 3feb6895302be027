use serde_json::{Value, json};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_and_set_cookie_for_valid_credentials() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&[("username", "alice"), ("password", "wonderland")])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("No session cookie set");
    assert!(cookie.starts_with("session_id="));
    assert!(cookie.contains("HttpOnly"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "result": "authenticated", "username": "alice" }));
}

#[tokio::test]
async fn should_not_reverify_once_authenticated() {
    let app = TestApp::new().await;

    app.post_login(&[("username", "alice"), ("password", "wonderland")])
        .await;

    let response = app
        .post_login(&[("username", "carol"), ("password", "x")])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("set-cookie").is_none());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "result": "already_authenticated", "username": "alice" })
    );
}

#[tokio::test]
async fn should_return_401_with_failure_message_for_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&[("username", "alice"), ("password", "wrong")])
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert!(response.headers().get("set-cookie").is_none());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Login failure!");

    let status: Value = app.get_session().await.json().await.unwrap();
    assert_eq!(status, json!({ "valid": false }));
}

#[tokio::test]
async fn should_return_204_when_nothing_is_submitted() {
    let app = TestApp::new().await;

    let response = app.post_login(&[]).await;

    assert_eq!(response.status().as_u16(), 204);
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn should_return_204_for_incomplete_form() {
    let app = TestApp::new().await;

    let response = app.post_login(&[("username", "alice")]).await;

    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn should_return_503_when_directory_is_down() {
    let directory = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&directory)
        .await;

    let app = TestApp::with_directory(directory.uri()).await;

    let response = app
        .post_login(&[("username", "alice"), ("password", "wonderland")])
        .await;

    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"], "rejected");
}

#[tokio::test]
async fn should_authenticate_against_directory() {
    let directory = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&directory)
        .await;

    let app = TestApp::with_directory(directory.uri()).await;

    let response = app
        .post_login(&[("username", "dave"), ("password", "directory-pass")])
        .await;
    assert_eq!(response.status().as_u16(), 200);

    // The second call must not reach the directory again
    let response = app
        .post_login(&[("username", "dave"), ("password", "directory-pass")])
        .await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_issue_new_session_id_instead_of_planted_one() {
    let app = TestApp::new().await;
    let planted = "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f";

    let response = reqwest::Client::new()
        .post(format!("{}/login", app.address))
        .header("cookie", format!("session_id={planted}"))
        .form(&[("username", "alice"), ("password", "wonderland")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("No session cookie set");
    assert!(cookie.starts_with("session_id="));
    assert!(!cookie.contains(planted));

    let status: Value = reqwest::Client::new()
        .get(format!("{}/session", app.address))
        .header("cookie", format!("session_id={planted}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status, json!({ "valid": false }));
}
