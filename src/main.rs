use clap::Parser;
use tracing::info;

use linkpane::config::{AppConfig, Args, init_config};
use linkpane::interfaces::tui::run_tui;
use linkpane::system::{init_logging, install_panic_hook};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.sample_config {
        print!("{}", AppConfig::sample_toml()?);
        return Ok(());
    }
    dotenvy::dotenv().ok();

    // 配置优先级：命令行 > 环境变量 > 配置文件 > 默认值
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;
    let config = init_config(config);

    // guard 必须活到程序结束，否则日志不会刷盘
    let _log_guard = init_logging(&config.logging)?;
    install_panic_hook();

    info!("linkpane v{} starting", env!("CARGO_PKG_VERSION"));
    run_tui(config).await?;
    info!("linkpane exited");

    Ok(())
}
