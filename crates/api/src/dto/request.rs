//! 请求 DTO 定义
//!
//! 必填字段缺失时反序列化为空串，由 validator 统一报告为参数错误

use mandi_domain::BusinessType;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 去除首尾空白后不能为空
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// 价格搜索查询参数
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// 翻译请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub from_lang: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub to_lang: String,
}

/// 登录请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// 注册请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// 未提供时按农户注册
    #[serde(default)]
    pub business_type: Option<BusinessType>,
}
