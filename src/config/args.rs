//! Command-line arguments
//!
//! Only configuration knobs live here; everything else happens inside the TUI.

use std::path::PathBuf;

use clap::Parser;

use super::AppConfig;

/// linkpane - shorten links and track where their clicks come from
#[derive(Parser, Debug, Default)]
#[command(name = "linkpane")]
#[command(version)]
#[command(about = "Terminal front-end for a URL shortener", long_about = None)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Override the shortener API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the log filter, e.g. "debug" or "linkpane=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub sample_config: bool,
}

impl Args {
    /// 命令行参数优先级最高
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
