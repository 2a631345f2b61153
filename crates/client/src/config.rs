//! 客户端配置

use std::path::PathBuf;
use std::time::Duration;

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// 价格查询客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 服务地址，如 `http://localhost:3001`
    pub base_url: String,
    /// 单次请求超时（含连接）
    pub timeout: Duration,
    /// 缓存文件路径，为空时只在内存中缓存
    pub cache_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_path: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// 价格搜索接口地址
    pub fn search_url(&self) -> String {
        format!(
            "{}/api/v1/price-discovery/search",
            self.base_url.trim_end_matches('/')
        )
    }
}
