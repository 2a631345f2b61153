//! API 错误类型定义
//!
//! 所有错误响应统一为 `{ success: false, code, error }`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("API endpoint not found")]
    EndpointNotFound,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::EndpointNotFound | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 内部错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换，消息中按字母序列出缺失的字段
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        Self::Validation(format!("Missing required fields: {}", fields.join(", ")))
    }
}

/// 请求体不是合法 JSON（或缺少 content-type）时按参数错误处理
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<mandi_shared::error::MandiError> for ApiError {
    fn from(err: mandi_shared::error::MandiError) -> Self {
        use mandi_shared::error::MandiError;

        match err {
            MandiError::Validation(msg) => Self::Validation(msg),
            MandiError::NotFound { entity, id } => Self::NotFound(format!("{entity} {id}")),
            other => Self::Internal(format!("[{}] {other}", other.code())),
        }
    }
}

/// API Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
