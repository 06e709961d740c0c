//! SatuData CLI binary.
//!
//! Command-line access to the portal resources:
//! - List a resource with search and dropdown filters
//! - Print dropdown values and counters
//! - Delete an item with explicit confirmation

use clap::Parser;
use satudata::PortalConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, handle_command};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "warn" };

    #[cfg(feature = "observability")]
    satudata::observability::init_observability_with_config(
        satudata::observability::ObservabilityConfig::new("satudata")
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    #[cfg(not(feature = "observability"))]
    satudata::init_telemetry(log_level, cli.json_logs)?;

    let mut config = match &cli.config {
        Some(path) => PortalConfig::from_file(path)?,
        None => PortalConfig::load()?,
    };
    if let Some(token) = cli.token {
        config = config.with_token(Some(token));
    }
    tracing::debug!(base_url = %config.base_url(), "Configuration loaded");

    let portal = satudata::Portal::new(config)?;
    let result = handle_command(&portal, cli.command).await;

    #[cfg(feature = "observability")]
    satudata::observability::shutdown_observability();

    result?;
    Ok(())
}
