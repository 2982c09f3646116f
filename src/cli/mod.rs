//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for logferry using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// logferry - incremental CloudWatch Logs to S3 exporter
#[derive(Parser, Debug)]
#[command(name = "logferry")]
#[command(version, about, long_about = None)]
#[command(author = "Logferry Contributors")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "LOGFERRY_LOG_LEVEL")]
    pub log_level: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one export invocation over the configured log groups
    Export(commands::export::ExportArgs),

    /// Show the watermarks currently recorded in the state store
    Status(commands::status::StatusArgs),
}
