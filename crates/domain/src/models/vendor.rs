//! 商户相关实体定义
//!
//! 包含商户主体，以及认证材料、刷新令牌、举报记录和语言偏好等附属记录

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use super::enums::{BusinessType, DocumentType, FlagSeverity, VerificationStatus};

/// 商户
///
/// 市场参与者：农户、贸易商、批发商或零售商
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub email: String,
    #[sqlx(default)]
    pub phone_number: Option<String>,
    pub name: String,
    #[sqlx(default)]
    pub business_name: Option<String>,
    pub business_type: BusinessType,
    /// 经营地点，数据库中以 JSONB 存储
    pub location: Json<VendorLocation>,
    pub preferred_language: String,
    pub secondary_languages: Vec<String>,
    pub verification_status: VerificationStatus,
    /// 信誉分，取值 0-5
    pub trust_score: f64,
    pub total_trades: i32,
    pub is_active: bool,
    #[sqlx(default)]
    pub last_active_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    /// 是否已通过认证
    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }

    /// 商户可沟通的全部语言，首选语言在前且不重复
    pub fn languages(&self) -> Vec<&str> {
        let mut langs = vec![self.preferred_language.as_str()];
        for lang in &self.secondary_languages {
            if !langs.contains(&lang.as_str()) {
                langs.push(lang);
            }
        }
        langs
    }
}

/// 商户经营地点
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorLocation {
    pub state: String,
    pub district: String,
    /// 常驻的 Mandi 名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// 商户认证材料
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDocument {
    pub id: String,
    pub vendor_id: String,
    pub document_type: DocumentType,
    pub document_url: String,
    pub status: VerificationStatus,
    #[sqlx(default)]
    pub rejection_reason: Option<String>,
    #[sqlx(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 刷新令牌（只保存哈希）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    pub id: String,
    pub vendor_id: String,
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    #[sqlx(default)]
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// 在给定时刻是否仍可用
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

/// 商户举报记录
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VendorFlag {
    pub id: String,
    pub vendor_id: String,
    /// 举报人，举报人账号删除后置空
    #[sqlx(default)]
    pub flagged_by: Option<String>,
    pub reason: String,
    pub severity: FlagSeverity,
    pub resolved: bool,
    #[sqlx(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// 商户语言偏好
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePreference {
    pub vendor_id: String,
    pub primary_language: String,
    pub secondary_languages: Vec<String>,
    pub auto_translate: bool,
    pub voice_enabled: bool,
    pub updated_at: DateTime<Utc>,
}
