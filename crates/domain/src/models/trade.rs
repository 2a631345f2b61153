//! 交易相关实体定义
//!
//! 交易会话 -> 参与者 / 议价报价 / 信誉评分，以及外部市场数据源

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{NegotiationStatus, ParticipantRole, SessionStatus};
use crate::error::{DomainError, Result};

/// 评分下限
pub const MIN_TRUST_SCORE: i16 = 1;
/// 评分上限
pub const MAX_TRUST_SCORE: i16 = 5;

/// 交易会话
///
/// 两个或以上商户围绕某一商品的议价上下文
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TradeSession {
    pub id: String,
    pub initiator_id: String,
    pub commodity: String,
    pub quantity: f64,
    pub unit: String,
    #[sqlx(default)]
    pub target_price: Option<f64>,
    #[sqlx(default)]
    pub final_price: Option<f64>,
    #[sqlx(default)]
    pub market_location: Option<String>,
    pub status: SessionStatus,
    #[sqlx(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[sqlx(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TradeSession {
    /// 是否已过期（状态仍为 active 但超过 expires_at）
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status == SessionStatus::Active && self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// 会话参与者
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SessionParticipant {
    pub session_id: String,
    pub vendor_id: String,
    pub role: ParticipantRole,
    pub joined_at: DateTime<Utc>,
}

/// 议价报价
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Negotiation {
    pub id: String,
    pub session_id: String,
    pub proposer_id: String,
    pub price: f64,
    pub quantity: f64,
    #[sqlx(default)]
    pub message: Option<String>,
    /// 报价消息的原始语言
    pub original_language: String,
    pub status: NegotiationStatus,
    #[sqlx(default)]
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Negotiation {
    /// 创建待处理报价
    ///
    /// 价格和数量必须为正数，与表约束一致
    pub fn new(
        session_id: impl Into<String>,
        proposer_id: impl Into<String>,
        price: f64,
        quantity: f64,
        message: Option<String>,
        original_language: impl Into<String>,
    ) -> Result<Self> {
        if !(price > 0.0) {
            return Err(DomainError::NonPositive { field: "price" });
        }
        if !(quantity > 0.0) {
            return Err(DomainError::NonPositive { field: "quantity" });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            proposer_id: proposer_id.into(),
            price,
            quantity,
            message,
            original_language: original_language.into(),
            status: NegotiationStatus::Pending,
            responded_at: None,
            created_at: Utc::now(),
        })
    }

    /// 报价总额
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity
    }
}

/// 信誉评分
///
/// 会话结束后参与者之间的互评，同一会话内每对评分人/被评人仅一条
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrustRating {
    pub id: String,
    pub session_id: String,
    pub rater_id: String,
    pub rated_id: String,
    pub score: i16,
    #[sqlx(default)]
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TrustRating {
    /// 创建评分，分数须在 1-5 之间且不能自评
    pub fn new(
        session_id: impl Into<String>,
        rater_id: impl Into<String>,
        rated_id: impl Into<String>,
        score: i16,
        review: Option<String>,
    ) -> Result<Self> {
        if !(MIN_TRUST_SCORE..=MAX_TRUST_SCORE).contains(&score) {
            return Err(DomainError::OutOfRange {
                field: "score",
                min: MIN_TRUST_SCORE.into(),
                max: MAX_TRUST_SCORE.into(),
                actual: score.into(),
            });
        }

        let rater_id = rater_id.into();
        let rated_id = rated_id.into();
        if rater_id == rated_id {
            return Err(DomainError::SameParty {
                field: "rater_id",
                other: "rated_id",
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            rater_id,
            rated_id,
            score,
            review,
            created_at: Utc::now(),
        })
    }
}

/// 外部市场数据源（如 Agmarknet 对接）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MarketIntegration {
    pub id: String,
    pub market_name: String,
    pub state: String,
    #[sqlx(default)]
    pub api_endpoint: Option<String>,
    pub is_active: bool,
    pub sync_interval_minutes: i32,
    #[sqlx(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
