use anyhow::{Context, Result};
use clap::Parser;
use question_extractor::cli::Cli;
use question_extractor::{logger, App};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = cli.load_config().context("加载配置失败")?;

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let _summary = App::initialize(config).run().await?;

    Ok(())
}
