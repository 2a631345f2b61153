//! 命令执行器
//!
//! 将命令行参数与配置合并后执行对应子命令

use anyhow::{Context, Result};
use mandi_domain::MockCatalog;
use mandi_shared::{config::AppConfig, database::Database};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::routes::build_router;
use crate::state::{AppState, ServiceInfo};

/// 命令执行器
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 serve 命令
    ///
    /// 配置了 `database.url` 时先建立连接池（供就绪探针使用），否则不连接数据库
    pub async fn run_serve(&mut self, port: Option<u16>, host: Option<String>) -> Result<()> {
        if let Some(port) = port {
            self.config.server.port = port;
        }
        if let Some(host) = host {
            self.config.server.host = host;
        }

        let database = match self.config.database.url {
            Some(_) => Some(
                Database::connect(&self.config.database)
                    .await
                    .context("连接数据库失败")?,
            ),
            None => {
                info!("database.url 未配置，以无数据库模式启动");
                None
            }
        };

        let state = AppState::new(
            MockCatalog::demo(),
            ServiceInfo::new(&self.config.service_name),
            database.clone(),
        );
        let app = build_router(state, &self.config.cors);

        let addr = self.config.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("绑定地址失败: {addr}"))?;

        info!(environment = %self.config.environment, "Listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务器运行失败")?;

        if let Some(db) = database {
            db.close().await;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// 执行 migrate 命令
    pub async fn run_migrate(&self) -> Result<()> {
        let db = Database::connect(&self.config.database)
            .await
            .context("连接数据库失败（请设置 MANDI_DATABASE__URL）")?;

        let result = db.run_migrations().await.context("执行迁移失败");
        db.close().await;
        result
    }
}

/// 监听关闭信号
///
/// 收到 Ctrl+C 或 SIGTERM 后返回，触发 axum 的优雅关闭流程
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "注册 Ctrl+C 处理器失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "注册 SIGTERM 处理器失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
