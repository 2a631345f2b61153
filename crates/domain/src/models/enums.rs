//! Mandi 枚举类型定义
//!
//! 所有枚举都支持数据库（sqlx）和 JSON（serde）序列化，
//! 字符串取值与迁移脚本中的 CHECK 约束保持一致。

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// 为枚举生成 `as_str` / `FromStr` / `Display`，取值即数据库中的字符串
macro_rules! impl_db_str {
    ($ty:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl $ty {
            /// 全部取值，顺序与 CHECK 约束一致
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// 数据库与 JSON 中使用的字符串
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant),)+
                    other => Err(DomainError::InvalidEnum {
                        kind: stringify!($ty),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// 商户经营类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum BusinessType {
    /// 农户 - 直接出售自产农产品
    #[default]
    Farmer,
    /// 贸易商
    Trader,
    /// 批发商
    Wholesaler,
    /// 零售商
    Retailer,
}

impl_db_str!(BusinessType {
    Farmer => "farmer",
    Trader => "trader",
    Wholesaler => "wholesaler",
    Retailer => "retailer",
});

/// 认证状态（商户与认证材料共用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl_db_str!(VerificationStatus {
    Pending => "pending",
    Verified => "verified",
    Rejected => "rejected",
});

/// 认证材料类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum DocumentType {
    Aadhaar,
    Pan,
    Gst,
    TradeLicense,
    BankStatement,
}

impl_db_str!(DocumentType {
    Aadhaar => "aadhaar",
    Pan => "pan",
    Gst => "gst",
    TradeLicense => "trade_license",
    BankStatement => "bank_statement",
});

/// 交易会话状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum SessionStatus {
    /// 进行中 - 允许继续出价
    #[default]
    Active,
    /// 已成交
    Completed,
    /// 已取消
    Cancelled,
    /// 已过期 - 超过 expires_at 仍未成交
    Expired,
}

impl_db_str!(SessionStatus {
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
    Expired => "expired",
});

impl SessionStatus {
    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// 会话参与者角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum ParticipantRole {
    Buyer,
    Seller,
    Observer,
}

impl_db_str!(ParticipantRole {
    Buyer => "buyer",
    Seller => "seller",
    Observer => "observer",
});

/// 议价报价状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum NegotiationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    /// 对方已还价
    Countered,
    Expired,
}

impl_db_str!(NegotiationStatus {
    Pending => "pending",
    Accepted => "accepted",
    Rejected => "rejected",
    Countered => "countered",
    Expired => "expired",
});

/// 商户举报严重程度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum FlagSeverity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl_db_str!(FlagSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

/// 数据导出/删除请求的处理状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl_db_str!(RequestStatus {
    Pending => "pending",
    Processing => "processing",
    Completed => "completed",
    Failed => "failed",
});

/// 数据导出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Pdf,
}

impl_db_str!(ExportFormat {
    Json => "json",
    Csv => "csv",
    Pdf => "pdf",
});

/// 洞察推送渠道
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum DeliveryChannel {
    Sms,
    Email,
    Push,
    #[default]
    InApp,
}

impl_db_str!(DeliveryChannel {
    Sms => "sms",
    Email => "email",
    Push => "push",
    InApp => "in_app",
});

/// 价格走势
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl_db_str!(TrendDirection {
    Rising => "rising",
    Falling => "falling",
    Stable => "stable",
});
