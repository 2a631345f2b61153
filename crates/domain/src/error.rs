//! 领域错误类型定义

use thiserror::Error;

/// 领域错误
///
/// 对应数据库 CHECK 约束在类型层面的校验失败
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("无效的 {kind} 取值: {value}")]
    InvalidEnum { kind: &'static str, value: String },

    #[error("{field} 超出范围 [{min}, {max}]: {actual}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{field} 必须为正数")]
    NonPositive { field: &'static str },

    #[error("{field} 不能与 {other} 相同")]
    SameParty {
        field: &'static str,
        other: &'static str,
    },
}

/// 领域 Result 类型别名
pub type Result<T> = std::result::Result<T, DomainError>;
