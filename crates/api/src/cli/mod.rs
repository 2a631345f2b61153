//! CLI 模块
//!
//! - `serve` - 启动 HTTP 服务（默认子命令）
//! - `migrate` - 执行数据库迁移后退出
//!
//! # 使用示例
//!
//! ```bash
//! mandi-server serve --port 3001
//! MANDI_DATABASE__URL=postgres://localhost/mandi mandi-server migrate
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::{CommandRunner, shutdown_signal};
