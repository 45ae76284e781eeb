use clap::Parser;
use tracing_subscriber::EnvFilter;

use addrbook::config::{Cli, Config};

fn main() {
    let config = Config::from_cli(Cli::parse());

    // Logs go to stderr so the prompt on stdout stays readable.
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    addrbook::cli::run(&config);
}
