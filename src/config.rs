use std::path::PathBuf;

use clap::Parser;

/// Environment variable that overrides `--log-level`.
pub const LOG_ENV: &str = "ADDRBOOK_LOG";

/// Personal contact book
#[derive(Debug, Parser)]
#[command(name = "addrbook")]
#[command(about = "Personal contact book with an interactive prompt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Contact file loaded at start (if present) and saved on exit
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Log filter used when $ADDRBOOK_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(cli, std::env::var(LOG_ENV).ok())
    }

    fn resolve(cli: Cli, env_filter: Option<String>) -> Self {
        let log_filter = env_filter
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(cli.log_level);
        Self {
            data_file: cli.file,
            log_filter,
        }
    }
}
