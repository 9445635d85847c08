//! calendly-client CLI entry point.

use std::time::Duration;

use anyhow::{Context, Result};
use calendly_client::cli::{Cli, Commands, OutputFormat};
use calendly_client::output::{format_output, json, pretty};
use calendly_client::{CalendlyClient, ClientConfig};
use calendly_core::OPERATIONS;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calendly_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Operations => match cli.format {
            OutputFormat::Json => println!("{}", json::format_json(OPERATIONS)),
            OutputFormat::Pretty => println!("{}", pretty::format_operations(OPERATIONS)),
        },
        Commands::Call(ref call) => {
            let token = cli
                .token
                .clone()
                .context("no access token: pass --token or set CALENDLY_TOKEN")?;
            let mut config = ClientConfig::new(token).with_base_url(&cli.base_url)?;
            if let Some(secs) = cli.timeout_secs {
                config = config.with_timeout(Duration::from_secs(secs));
            }
            let client = CalendlyClient::new(config)?;

            let value = client
                .call(&call.operation, call.path_params(), call.params())
                .await?;
            if !(cli.quiet && value.is_null()) {
                println!("{}", format_output(&value, cli.format));
            }
        }
    }

    Ok(())
}
