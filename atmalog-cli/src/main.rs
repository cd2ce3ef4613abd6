mod cli;
mod cli_modes;
mod editor_utils;
mod render;

use anyhow::Result;
use atmalog_core::{AtmaLog, Config};
use cli::Cli;
use cli_modes::{AtmaLogCli, CliModeResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(CliModeResult::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("atmalog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<CliModeResult> {
    let cli = Cli::new();
    let mut config = Config::load()?;
    if let Some(api_key) = cli.api_key.clone() {
        config.api_key = Some(api_key);
    }
    if let Some(model) = cli.model.clone() {
        config.model = model;
    }

    // Log to stderr so stdout only carries the journal output.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(data_dir = %config.data_dir.display(), model = %config.model, "starting atmalog");

    let app = AtmaLog::with_config(config)?;
    let mut atmalog_cli = AtmaLogCli::new(cli, app);
    atmalog_cli.run().await
}
