use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use correction_assistant::cli::Cli;
use correction_assistant::{logger, App, Config, ConsolePresenter, RunOutcome};
use tracing::error;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // 加载 .env（不存在时忽略）
    let _ = dotenvy::dotenv();

    // 加载配置，日志级别以配置为准
    let config = Config::from_env();
    logger::init(config.as_ref().is_ok_and(|c| c.verbose_logging));

    let cli = Cli::parse();

    // 缺少 API 密钥时直接退出
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 配置无效，请检查 .env 文件: {}", e);
            return Err(e).context("配置加载失败");
        }
    };

    // 初始化应用
    let app = App::initialize(config).await?;

    let form = cli.to_form().await;
    let mut presenter = ConsolePresenter::new(&cli.output_dir);

    match app.run(&form, &mut presenter).await {
        RunOutcome::Rejected => Ok(ExitCode::from(2)),
        RunOutcome::Completed { result, .. } => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
