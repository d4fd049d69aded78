//! Vaultmon CLI entry point.

use clap::Parser;
use vaultmon_types::Severity;

mod cli;
mod commands;
mod output;
mod ui;

use cli::Cli;

#[tokio::main]
async fn main() {
    init_logging();

    let code = match Cli::try_parse() {
        Ok(cli) => cli.execute().await,
        Err(e) => {
            // Help, version and argument errors all mean the requested fact
            // could not be determined.
            let _ = e.print();
            Severity::Undefined.exit_code()
        }
    };

    std::process::exit(code);
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vaultmon=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
