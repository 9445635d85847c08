//! CLI command definitions.

pub mod call;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the Calendly API.
#[derive(Debug, Parser)]
#[command(name = "calendly-client")]
#[command(version, about = "CLI client for the Calendly API", long_about = None)]
pub struct Cli {
    /// API base URL.
    #[arg(long, env = "CALENDLY_API_URL", default_value = calendly_core::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Personal access or OAuth token.
    #[arg(long, env = "CALENDLY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "CALENDLY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every operation the client knows.
    Operations,
    /// Run one operation.
    Call(call::CallCommand),
}
