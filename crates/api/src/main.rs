//! Car Catalogue - command line client
//!
//! Main entry point for the `carcatalogue` binary.

use anyhow::Context;
use carcatalogue_lib::{execute, AppContext, Command};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "carcatalogue", version, about = "Car rental catalogue client")]
struct Cli {
    /// Log one JSON object per line instead of plain text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
#[allow(clippy::print_stdout)]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so it can supply argument defaults
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    carcatalogue_lib::utils::logging::init_tracing(cli.json_logs);
    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let context = AppContext::new().await.context("failed to initialize app context")?;
    let output = execute(&context, cli.command).await?;

    let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
