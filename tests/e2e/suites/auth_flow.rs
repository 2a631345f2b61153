//! 认证流程：注册 -> 登录 -> 登出

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::setup::TestEnvironment;

#[tokio::test]
async fn test_register_login_logout() {
    let mut env = TestEnvironment::setup().await.unwrap();

    let register = env
        .http
        .post(env.url("/api/v1/auth/register"))
        .json(&json!({
            "email": "meena@example.com",
            "password": "secret",
            "name": "Meena",
            "businessType": "retailer"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);
    let register: Value = register.json().await.unwrap();
    assert_eq!(register["user"]["name"], "Meena");
    assert_eq!(register["user"]["businessType"], "retailer");

    let login: Value = env
        .http
        .post(env.url("/api/v1/auth/login"))
        .json(&json!({ "email": "meena@example.com", "password": "secret" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(login["token"], register["token"]);

    let logout = env
        .http
        .post(env.url("/api/v1/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::OK);

    env.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let mut env = TestEnvironment::setup().await.unwrap();

    for body in [
        json!({ "email": "meena@example.com" }),
        json!({ "password": "secret" }),
        json!({ "email": "", "password": "secret" }),
    ] {
        let response = env
            .http
            .post(env.url("/api/v1/auth/login"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body={body}");
    }

    env.shutdown().await.unwrap();
}
