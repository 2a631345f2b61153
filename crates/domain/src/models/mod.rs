//! 领域实体模块
//!
//! 每个结构体对应一张表，字段名与列名一致（序列化时转为 camelCase）

pub mod analytics;
pub mod enums;
pub mod trade;
pub mod vendor;

pub use analytics::{
    DataDeletionRequest, DataExportRequest, InsightDeliveryLog, MarketTrendAnalysis,
    TradingPerformanceSnapshot, VendorAnalyticsPreferences, WeeklyTradingSummary,
};
pub use enums::{
    BusinessType, DeliveryChannel, DocumentType, ExportFormat, FlagSeverity, NegotiationStatus,
    ParticipantRole, RequestStatus, SessionStatus, TrendDirection, VerificationStatus,
};
pub use trade::{
    MAX_TRUST_SCORE, MIN_TRUST_SCORE, MarketIntegration, Negotiation, SessionParticipant,
    TradeSession, TrustRating,
};
pub use vendor::{
    LanguagePreference, RefreshToken, Vendor, VendorFlag, VendorLocation, VerificationDocument,
};
