//! 认证相关的 HTTP 处理器
//!
//! 演示版本：字段齐全即视为成功，返回固定令牌，不做密码校验也不签发 JWT

use axum::{Json, extract::rejection::JsonRejection};
use mandi_domain::BusinessType;
use mandi_shared::observability::metrics;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::{AuthResponse, AuthUser, LoginRequest, MessageResponse, RegisterRequest};
use crate::error::{ApiError, Result};

/// 演示令牌
pub const DEMO_TOKEN: &str = "demo-token-mandi-2024";
/// 演示用户 ID
pub const DEMO_USER_ID: &str = "demo-user-001";
/// 登录时返回的演示用户名
pub const DEMO_USER_NAME: &str = "Demo Vendor";

/// 解析并校验请求体，失败时记录认证指标
fn validated<T: Validate>(
    action: &'static str,
    payload: std::result::Result<Json<T>, JsonRejection>,
) -> Result<T> {
    let result = payload
        .map_err(ApiError::from)
        .and_then(|Json(req)| req.validate().map(|_| req).map_err(ApiError::from));

    if let Err(e) = &result {
        warn!(action, error = %e, "认证请求参数无效");
        metrics::record_auth_request(action, "rejected");
    }
    result
}

/// 登录
///
/// POST /api/v1/auth/login
pub async fn login(
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let req = validated("login", payload)?;

    info!(email = %req.email, "演示登录");
    metrics::record_auth_request("login", "success");

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token: DEMO_TOKEN.to_string(),
        user: AuthUser {
            id: DEMO_USER_ID.to_string(),
            email: req.email,
            name: DEMO_USER_NAME.to_string(),
            business_type: BusinessType::Farmer,
        },
    }))
}

/// 注册
///
/// POST /api/v1/auth/register
pub async fn register(
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let req = validated("register", payload)?;
    let business_type = req.business_type.unwrap_or_default();

    info!(email = %req.email, business_type = %business_type, "演示注册");
    metrics::record_auth_request("register", "success");

    Ok(Json(AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
        token: DEMO_TOKEN.to_string(),
        user: AuthUser {
            id: DEMO_USER_ID.to_string(),
            email: req.email,
            name: req.name,
            business_type,
        },
    }))
}

/// 登出：无会话状态，直接返回成功
pub async fn logout() -> Json<MessageResponse> {
    metrics::record_auth_request("logout", "success");
    Json(MessageResponse::ok("Logged out successfully"))
}
