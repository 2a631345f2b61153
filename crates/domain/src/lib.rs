//! Mandi 领域模型
//!
//! 描述农产品市场（Mandi）商户、交易会话、议价、信誉评分和分析快照等实体。
//! 这些类型与 `migrations/` 中的表结构一一对应，仅用于序列化和行映射，
//! 不包含议价引擎、信誉计算或趋势分析等业务逻辑。
//!
//! ## 模块结构
//!
//! - `models`: 实体与枚举定义（serde camelCase + sqlx 行映射）
//! - `catalog`: 演示服务返回的固定价格与语言数据
//! - `error`: 领域错误类型

pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::{Language, MockCatalog, PriceRecord, demo_vendor_profile};
pub use error::{DomainError, Result};
pub use models::*;
