//! 分析与隐私请求实体定义
//!
//! 这些表由仓库外部的分析流水线写入，这里只提供行映射。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use super::enums::{DeliveryChannel, ExportFormat, RequestStatus, TrendDirection};

/// 商户周交易汇总
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTradingSummary {
    pub id: String,
    pub vendor_id: String,
    /// 周一日期
    pub week_start: NaiveDate,
    pub total_trades: i32,
    pub total_volume: f64,
    pub total_value: f64,
    pub avg_negotiation_rounds: f64,
    pub top_commodities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// 数据导出请求
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DataExportRequest {
    pub id: String,
    pub vendor_id: String,
    pub status: RequestStatus,
    pub format: ExportFormat,
    #[sqlx(default)]
    pub download_url: Option<String>,
    pub requested_at: DateTime<Utc>,
    #[sqlx(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[sqlx(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// 数据删除请求
///
/// 默认在申请 30 天后执行
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DataDeletionRequest {
    pub id: String,
    pub vendor_id: String,
    pub status: RequestStatus,
    #[sqlx(default)]
    pub reason: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub scheduled_for: DateTime<Utc>,
    #[sqlx(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// 洞察推送记录
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InsightDeliveryLog {
    pub id: String,
    pub vendor_id: String,
    pub insight_type: String,
    pub channel: DeliveryChannel,
    pub payload: Json<serde_json::Value>,
    pub delivered_at: DateTime<Utc>,
    #[sqlx(default)]
    pub opened_at: Option<DateTime<Utc>>,
}

/// 商户交易表现快照（按日）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TradingPerformanceSnapshot {
    pub id: String,
    pub vendor_id: String,
    pub snapshot_date: NaiveDate,
    /// 成交率，取值 0-1
    pub success_rate: f64,
    pub avg_price_delta: f64,
    pub trust_score: f64,
    pub active_sessions: i32,
    pub created_at: DateTime<Utc>,
}

/// 市场价格趋势分析
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrendAnalysis {
    pub id: String,
    pub commodity: String,
    pub market_location: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub trend: TrendDirection,
    pub volatility: f64,
    pub created_at: DateTime<Utc>,
}

impl MarketTrendAnalysis {
    /// 统计区间天数（含首尾）
    pub fn period_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days() + 1
    }
}

/// 商户分析偏好
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VendorAnalyticsPreferences {
    pub vendor_id: String,
    pub weekly_summary_enabled: bool,
    pub insight_channel: DeliveryChannel,
    pub data_sharing_consent: bool,
    pub updated_at: DateTime<Utc>,
}
