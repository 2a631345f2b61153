//! API DTO 模块
//!
//! 包含所有请求和响应的数据传输对象

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterRequest, SearchParams, TranslateRequest};
pub use response::{
    ApiTestResponse, AuthResponse, AuthUser, HealthResponse, MessageResponse, ReadinessChecks,
    ReadinessResponse, ServerInfoResponse, TranslationResponse,
};
