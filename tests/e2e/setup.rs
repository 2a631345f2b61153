//! 测试环境：启动与关闭进程内服务

use std::net::SocketAddr;

use anyhow::{Context, Result};
use mandi_api::{AppState, build_router};
use mandi_shared::config::CorsConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// 运行中的服务实例
pub struct TestEnvironment {
    pub addr: SocketAddr,
    pub http: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<()>>,
}

impl TestEnvironment {
    /// 绑定随机端口并启动服务
    pub async fn setup() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("绑定端口失败")?;
        let addr = listener.local_addr()?;

        let app = build_router(AppState::demo("mandi-api"), &CorsConfig::default());
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            http: reqwest::Client::new(),
            shutdown: Some(tx),
            server: Some(server),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// 关闭服务并等待监听端口释放
    pub async fn shutdown(&mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(server) = self.server.take() {
            server.await.context("服务任务异常退出")?;
        }
        Ok(())
    }
}
