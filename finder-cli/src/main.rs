mod cli;
mod config;
mod serve;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

const SERVICE_NAME: &str = "restaurant-finder";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let init = if cli.log_json {
        finder_telemetry::init_json_telemetry(SERVICE_NAME)
    } else {
        finder_telemetry::init_telemetry(SERVICE_NAME)
    };
    if let Err(e) = init {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    match cli.command.unwrap_or(Commands::Serve(cli.serve)) {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Find(args) => serve::run_find(args),
    }
}
