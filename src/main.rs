// logferry - Incremental CloudWatch Logs to S3 Exporter
// Copyright (c) 2025 Logferry Contributors
// Licensed under the MIT License

use clap::Parser;
use logferry::cli::{Cli, Commands};
use logferry::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(2);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "logferry - Incremental CloudWatch Logs to S3 Exporter"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute().await,
        Commands::Status(args) => args.execute().await,
    }
}
