//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router, middleware,
    routing::{get, post},
};
use mandi_shared::config::CorsConfig;
use mandi_shared::observability::middleware as obs_middleware;

use crate::handlers::{auth, fallback, health, price_discovery, translation, vendor};
use crate::middleware::{cors_layer, security_headers};
use crate::state::AppState;

/// `/api/v1` 下的业务路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(health::api_test))
        // 价格发现
        .route("/price-discovery/search", get(price_discovery::search))
        // 翻译
        .route("/translation/languages", get(translation::languages))
        .route("/translation/translate", post(translation::translate))
        // 认证
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/logout", post(auth::logout))
        // 商户
        .route("/vendors/profile/{vendor_id}", get(vendor::get_profile))
}

/// 构建完整应用
///
/// 未匹配的路径统一交给 `fallback::handle_unmatched`（嵌套路由继承外层兜底）
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_routes())
        .fallback(fallback::handle_unmatched)
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer(cors))
        // 可观测性中间件：请求追踪和指标收集
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
