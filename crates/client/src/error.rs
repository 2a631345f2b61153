//! 客户端错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 服务端返回非 2xx 状态码
    #[error("服务端返回错误状态: {0}")]
    Status(u16),

    #[error("缓存文件读写失败: {0}")]
    Cache(#[from] std::io::Error),

    #[error("缓存序列化失败: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
