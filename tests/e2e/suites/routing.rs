//! 翻译、商户资料与兜底路由

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::setup::TestEnvironment;

#[tokio::test]
async fn test_translate_and_profile() {
    let mut env = TestEnvironment::setup().await.unwrap();

    let translation: Value = env
        .http
        .post(env.url("/api/v1/translation/translate"))
        .json(&json!({ "text": "hello", "fromLang": "en", "toLang": "hi" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        translation["translatedText"],
        "[Translated from en to hi] hello"
    );

    let profile: Value = env
        .http
        .get(env.url("/api/v1/vendors/profile/abc123"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["id"], "abc123");

    env.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_api_path_and_server_info() {
    let mut env = TestEnvironment::setup().await.unwrap();

    let response = env
        .http
        .get(env.url("/api/v1/nothing-here"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "API endpoint not found");

    let info = env.http.get(env.url("/")).send().await.unwrap();
    assert_eq!(info.status(), StatusCode::OK);
    let info: Value = info.json().await.unwrap();
    assert_eq!(info["status"], "running");

    env.shutdown().await.unwrap();
}
