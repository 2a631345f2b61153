//! CLI 命令定义

use clap::{Parser, Subcommand};

/// MandiChallenge 演示服务
#[derive(Parser, Debug)]
#[command(name = "mandi-server")]
#[command(version, about = "MandiChallenge 演示 API 服务")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// 未指定子命令时按 `serve` 处理
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            port: None,
            host: None,
        })
    }
}

/// 子命令枚举
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 启动 HTTP 服务
    Serve {
        /// 监听端口，默认取配置 server.port
        #[arg(short, long)]
        port: Option<u16>,

        /// 监听地址，默认取配置 server.host
        #[arg(long)]
        host: Option<String>,
    },

    /// 执行 migrations/ 中尚未应用的迁移
    Migrate,
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::try_parse_from(["mandi-server", "serve", "--port", "8080"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Commands::Serve {
                port: Some(8080),
                host: None
            }
        );
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_default_command() {
        let cli = Cli::try_parse_from(["mandi-server", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            cli.command_or_default(),
            Commands::Serve { port: None, host: None }
        ));
    }

    #[test]
    fn test_cli_parse_migrate() {
        let cli = Cli::try_parse_from(["mandi-server", "migrate"]).unwrap();
        assert_eq!(cli.command_or_default(), Commands::Migrate);
    }

    #[test]
    fn test_cli_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["mandi-server", "serve", "--port", "99999"]).is_err());
    }
}
