//! MandiChallenge 演示服务入口

use anyhow::Context;
use clap::Parser;
use mandi_api::cli::{Cli, CommandRunner, Commands};
use mandi_shared::{config::AppConfig, observability};

const SERVICE_NAME: &str = "mandi-api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(SERVICE_NAME).context("加载配置失败")?;
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    let _guard = observability::init(&config.observability, &config.service_name).await?;

    let mut runner = CommandRunner::new(config);
    match cli.command_or_default() {
        Commands::Serve { port, host } => runner.run_serve(port, host).await?,
        Commands::Migrate => runner.run_migrate().await?,
    }

    Ok(())
}
