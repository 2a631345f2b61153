//! MandiChallenge 价格查询客户端
//!
//! 调用价格搜索接口，并把每次成功的结果按查询词缓存到本地。
//! 服务不可达时切换为离线状态，返回缓存中的数据。
//!
//! ## 模块结构
//!
//! - `config`: 客户端配置
//! - `cache`: 离线缓存（DashMap + JSON 文件）
//! - `client`: 搜索客户端与连通状态
//! - `error`: 错误类型

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::OfflineCache;
pub use client::{Connectivity, PriceSearchClient, SearchOutcome, SearchSource};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
