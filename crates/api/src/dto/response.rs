//! 响应 DTO 定义
//!
//! 业务端点直接返回扁平对象或数组，不再套统一的响应包装

use chrono::{DateTime, Utc};
use mandi_domain::BusinessType;
use serde::{Deserialize, Serialize};

/// 存活探针响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

/// 就绪探针各项检查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessChecks {
    /// ok / fail / disabled
    pub database: String,
}

/// 就绪探针响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// ok / degraded
    pub status: String,
    pub service: String,
    pub checks: ReadinessChecks,
}

/// 连通性测试响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTestResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// 翻译响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub from_lang: String,
    pub to_lang: String,
    pub confidence: f64,
}

/// 登录/注册返回的用户信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub business_type: BusinessType,
}

/// 登录/注册响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AuthUser,
}

/// 仅含提示信息的成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// 非 API 路径返回的服务信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfoResponse {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
}
