//! 数据库连接管理模块
//!
//! 提供 PostgreSQL 连接池管理，支持健康检查和嵌入式迁移。

use crate::config::DatabaseConfig;
use crate::error::{MandiError, Result};
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// 编译期嵌入的迁移脚本（位于工作区根目录 migrations/）
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// 数据库连接池包装
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 创建数据库连接池
    ///
    /// 配置中未提供 `url` 时返回 `DatabaseNotConfigured`
    #[instrument(skip(config))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or(MandiError::DatabaseNotConfigured)?;

        info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(url)
            .await?;

        info!("Database connection pool created");

        Ok(Self { pool })
    }

    /// 健康检查
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(MandiError::from)
    }

    /// 关闭连接池
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    /// 执行所有未应用的迁移
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<()> {
        info!(
            available = MIGRATOR.iter().count(),
            "Running database migrations..."
        );
        MIGRATOR.run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_embedded() {
        // 迁移脚本按版本号有序嵌入
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert!(versions.len() >= 2);
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_connect_without_url() {
        let config = DatabaseConfig::default();
        let result = Database::connect(&config).await;
        assert!(matches!(result, Err(MandiError::DatabaseNotConfigured)));
    }

    #[tokio::test]
    #[ignore] // 需要数据库连接
    async fn test_database_connection_and_migrations() {
        let config = DatabaseConfig {
            url: std::env::var("MANDI_DATABASE__URL").ok(),
            ..Default::default()
        };
        let db = Database::connect(&config).await.unwrap();
        db.health_check().await.unwrap();
        db.run_migrations().await.unwrap();
    }
}
