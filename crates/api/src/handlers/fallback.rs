//! 未匹配路由的兜底处理
//!
//! `/api` 下的未知路径返回 404；其他 GET 请求返回服务信息

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use crate::dto::ServerInfoResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// 对外公布的端点列表
pub const ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET /ready",
    "GET /api/v1/test",
    "GET /api/v1/price-discovery/search?q=",
    "GET /api/v1/translation/languages",
    "POST /api/v1/translation/translate",
    "POST /api/v1/auth/login",
    "POST /api/v1/auth/register",
    "POST /api/v1/auth/logout",
    "GET /api/v1/vendors/profile/{vendorId}",
];

/// 是否属于 API 命名空间
pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// 路由兜底
pub async fn handle_unmatched(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        tracing::debug!(method = %method, path = %uri.path(), "未知 API 端点");
        return ApiError::EndpointNotFound.into_response();
    }

    if method != Method::GET {
        return ApiError::NotFound(uri.path().to_string()).into_response();
    }

    Json(server_info(&state)).into_response()
}

fn server_info(state: &AppState) -> ServerInfoResponse {
    ServerInfoResponse {
        service: state.service.name.clone(),
        version: state.service.version.to_string(),
        status: "running".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/v1/unknown"));
        assert!(is_api_path("/api/"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/"));
        assert!(!is_api_path("/dashboard"));
    }
}
