//! 价格搜索客户端
//!
//! 对应前端价格页：联网时查询服务端并刷新缓存，断网时展示缓存数据和离线提示。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mandi_domain::PriceRecord;
use tracing::{info, warn};

use crate::cache::OfflineCache;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// 离线提示文案
pub const OFFLINE_BANNER: &str = "You are offline. Showing cached prices.";

/// 连通状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

/// 搜索结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    Network,
    Cache,
}

/// 一次搜索的结果
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub records: Vec<PriceRecord>,
    pub source: SearchSource,
}

/// 连接失败、超时或请求未能发出都视为服务不可达
fn is_unreachable(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout() || e.is_request()
}

/// 价格搜索客户端
///
/// 克隆后共享同一个缓存和连通状态
#[derive(Clone)]
pub struct PriceSearchClient {
    http: reqwest::Client,
    config: ClientConfig,
    cache: Arc<OfflineCache>,
    online: Arc<AtomicBool>,
}

impl PriceSearchClient {
    /// 创建客户端，配置了缓存路径时从文件加载已有缓存
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let cache = match &config.cache_path {
            Some(path) => OfflineCache::load(path).await?,
            None => OfflineCache::in_memory(),
        };
        Self::with_cache(config, cache)
    }

    /// 使用外部提供的缓存创建客户端
    pub fn with_cache(config: ClientConfig, cache: OfflineCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            cache: Arc::new(cache),
            online: Arc::new(AtomicBool::new(true)),
        })
    }

    /// 搜索商品价格
    ///
    /// - 成功：写入缓存，标记在线，返回服务端数据
    /// - 服务不可达：标记离线，返回该查询词的缓存（没有则为空列表）
    /// - 服务端返回非 2xx：返回 `ClientError::Status`，连通状态与缓存均不变
    /// - 缓存文件写入失败只记录告警，仍返回服务端数据
    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let response = self
            .http
            .get(self.config.search_url())
            .query(&[("q", query.trim())])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if is_unreachable(&e) => {
                warn!(error = %e, query = %query, "价格服务不可达，使用离线缓存");
                return Ok(self.offline_outcome(query));
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), query = %query, "价格搜索返回错误状态");
            return Err(ClientError::Status(status.as_u16()));
        }

        let records: Vec<PriceRecord> = response.json().await?;

        if !self.online.swap(true, Ordering::SeqCst) {
            info!("价格服务已恢复连接");
        }
        self.cache.insert(query, records.clone());
        // 写盘失败不影响本次结果，内存缓存已更新
        if let Err(e) = self.cache.persist().await {
            warn!(error = %e, query = %query, "离线缓存写入失败");
        }

        Ok(SearchOutcome {
            records,
            source: SearchSource::Network,
        })
    }

    fn offline_outcome(&self, query: &str) -> SearchOutcome {
        self.online.store(false, Ordering::SeqCst);

        let records = self
            .cache
            .get(query)
            .map(|entry| entry.records)
            .unwrap_or_default();

        SearchOutcome {
            records,
            source: SearchSource::Cache,
        }
    }

    /// 当前连通状态（以最近一次请求结果为准，初始为在线）
    pub fn connectivity(&self) -> Connectivity {
        if self.online.load(Ordering::SeqCst) {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }

    /// 离线时返回提示文案
    pub fn offline_banner(&self) -> Option<&'static str> {
        match self.connectivity() {
            Connectivity::Offline => Some(OFFLINE_BANNER),
            Connectivity::Online => None,
        }
    }

    pub fn cache(&self) -> &OfflineCache {
        &self.cache
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
