//! 应用状态定义
//!
//! 启动后只读，通过 Clone 在 handler 间共享

use std::sync::Arc;

use mandi_domain::MockCatalog;
use mandi_shared::database::Database;

/// 服务标识，用于健康检查与服务信息响应
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: &'static str,
}

impl ServiceInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 演示价格与语言数据
    pub catalog: Arc<MockCatalog>,
    pub service: ServiceInfo,
    /// 未配置 `database.url` 时为空，就绪检查据此报告 `disabled`
    pub database: Option<Database>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(catalog: MockCatalog, service: ServiceInfo, database: Option<Database>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            service,
            database,
        }
    }

    /// 使用内置演示数据、无数据库的状态（测试与本地演示）
    pub fn demo(service_name: impl Into<String>) -> Self {
        Self::new(MockCatalog::demo(), ServiceInfo::new(service_name), None)
    }
}
