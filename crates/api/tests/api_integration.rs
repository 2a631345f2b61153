//! API 路由集成测试
//!
//! 通过 `tower::ServiceExt::oneshot` 直接驱动完整路由（含中间件），不监听端口

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use mandi_api::{AppState, build_router, handlers::auth::DEMO_TOKEN};
use mandi_shared::config::CorsConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

fn create_test_app() -> Router {
    build_router(AppState::demo("mandi-api"), &CorsConfig::default())
}

async fn get(uri: &str) -> Response {
    create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(uri: &str, body: Value) -> Response {
    create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// 健康检查
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["service"], "mandi-api");
    assert!(!json["version"].as_str().unwrap().is_empty());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_readiness_without_database() {
    let json = body_json(get("/ready").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["database"], "disabled");
}

#[tokio::test]
async fn test_api_test_endpoint() {
    let json = body_json(get("/api/v1/test").await).await;
    assert_eq!(json["message"], "API is working!");
    assert!(json["timestamp"].is_string());
}

// ============================================================================
// 价格发现
// ============================================================================

#[tokio::test]
async fn test_search_rice() {
    let response = get("/api/v1/price-discovery/search?q=rice").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["commodity"], "Rice");
    assert!(records[0]["lastUpdated"].is_string());
}

#[tokio::test]
async fn test_search_case_insensitive() {
    let json = body_json(get("/api/v1/price-discovery/search?q=RiCe").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_empty_query_returns_all() {
    let all = body_json(get("/api/v1/price-discovery/search?q=").await).await;
    assert_eq!(all.as_array().unwrap().len(), 7);

    let missing = body_json(get("/api/v1/price-discovery/search").await).await;
    assert_eq!(missing.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_search_no_match() {
    let response = get("/api/v1/price-discovery/search?q=xyz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ============================================================================
// 翻译
// ============================================================================

#[tokio::test]
async fn test_languages() {
    let json = body_json(get("/api/v1/translation/languages").await).await;
    let languages = json.as_array().unwrap();
    assert_eq!(languages.len(), 11);
    assert!(
        languages
            .iter()
            .any(|l| l["code"] == "hi" && l["nativeName"] == "हिन्दी")
    );
}

#[tokio::test]
async fn test_translate() {
    let response = post_json(
        "/api/v1/translation/translate",
        json!({ "text": "hello", "fromLang": "en", "toLang": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["translatedText"], "[Translated from en to hi] hello");
    assert_eq!(json["originalText"], "hello");
    assert_eq!(json["fromLang"], "en");
    assert_eq!(json["toLang"], "hi");
    assert_eq!(json["confidence"], 0.95);
}

#[tokio::test]
async fn test_translate_missing_field() {
    let response = post_json(
        "/api/v1/translation/translate",
        json!({ "text": "hello", "fromLang": "en" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("to_lang"));
}

// ============================================================================
// 认证
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let response = post_json(
        "/api/v1/auth/login",
        json!({ "email": "ravi@example.com", "password": "secret" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["token"], DEMO_TOKEN);
    assert_eq!(json["user"]["email"], "ravi@example.com");
    assert_eq!(json["user"]["businessType"], "farmer");
}

#[tokio::test]
async fn test_login_missing_password() {
    let response = post_json("/api/v1/auth/login", json!({ "email": "ravi@example.com" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_missing_email() {
    let response = post_json("/api/v1/auth/login", json!({ "password": "secret" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_invalid_json() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_echoes_name() {
    let response = post_json(
        "/api/v1/auth/register",
        json!({
            "email": "asha@example.com",
            "password": "secret",
            "name": "Asha",
            "businessType": "trader"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token"], DEMO_TOKEN);
    assert_eq!(json["user"]["name"], "Asha");
    assert_eq!(json["user"]["businessType"], "trader");
}

#[tokio::test]
async fn test_register_default_business_type() {
    let json = body_json(
        post_json(
            "/api/v1/auth/register",
            json!({ "email": "asha@example.com", "password": "secret", "name": "Asha" }),
        )
        .await,
    )
    .await;
    assert_eq!(json["user"]["businessType"], "farmer");
}

#[tokio::test]
async fn test_register_missing_name() {
    let response = post_json(
        "/api/v1/auth/register",
        json!({ "email": "asha@example.com", "password": "secret" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_missing_email_or_password() {
    for body in [
        json!({ "password": "secret", "name": "Asha" }),
        json!({ "email": "asha@example.com", "name": "Asha" }),
        json!({ "email": "  ", "password": "secret", "name": "Asha" }),
    ] {
        let response = post_json("/api/v1/auth/register", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body={body}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_logout() {
    let response = post_json("/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Logged out successfully");
}

// ============================================================================
// 商户资料
// ============================================================================

#[tokio::test]
async fn test_vendor_profile_uses_path_id() {
    let response = get("/api/v1/vendors/profile/abc123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "abc123");
    assert_eq!(json["businessType"], "farmer");
    assert!(json["location"]["state"].is_string());
}

// ============================================================================
// 兜底路由与中间件
// ============================================================================

#[tokio::test]
async fn test_unknown_api_path() {
    for uri in ["/api/v1/unknown", "/api/v2/prices", "/api"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri={uri}");

        let json = body_json(response).await;
        assert_eq!(json["error"], "API endpoint not found");
    }

    let response = post_json("/api/v1/does-not-exist", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_api_get_returns_server_info() {
    let response = get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["service"], "mandi-api");
    assert_eq!(json["status"], "running");
    assert!(!json["version"].as_str().unwrap().is_empty());
    assert!(!json["endpoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_api_non_get_returns_not_found() {
    let response = post_json("/dashboard", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Resource not found: /dashboard");
}

#[tokio::test]
async fn test_wrong_method_on_known_route() {
    let response = get("/api/v1/auth/login").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = post_json("/api/v1/price-discovery/search", json!({})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_request_id_and_security_headers() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-123");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");

    // 未提供时自动生成
    let response = get("/api/v1/unknown").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/auth/login")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
