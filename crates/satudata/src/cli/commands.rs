//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use satudata::PortalResource;
use std::path::PathBuf;

/// SatuData - browse and manage government open-data portal resources
#[derive(Parser, Debug)]
#[command(name = "satudata")]
#[command(about = "Browse and manage government open-data portal resources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file (defaults to the layered search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token, overriding the configured one
    #[arg(long, global = true)]
    pub token: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a resource list and print the filtered view
    List {
        /// Resource name (opd, urusan, buku, akun_kepala_dinas, trx_sektoral, users)
        resource: PortalResource,

        /// Case-insensitive text search
        #[arg(long)]
        search: Option<String>,

        /// Categorical filter as name=value (repeatable)
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print dropdown values and counters of a resource
    Stats {
        /// Resource name
        resource: PortalResource,

        /// Only this field (defaults to every filter field)
        #[arg(long)]
        field: Option<String>,
    },

    /// Delete one item
    Delete {
        /// Resource name
        resource: PortalResource,

        /// Item id
        id: i64,

        /// Confirm the deletion; without it nothing is sent
        #[arg(long)]
        yes: bool,
    },
}

impl Commands {
    /// Resource the command operates on.
    pub fn resource(&self) -> PortalResource {
        match self {
            Self::List { resource, .. }
            | Self::Stats { resource, .. }
            | Self::Delete { resource, .. } => *resource,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Parse a `name=value` filter argument.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filters() {
        assert_eq!(
            parse_filter("status=active").unwrap(),
            ("status".to_string(), "active".to_string())
        );
        assert_eq!(
            parse_filter("nama_opd=Dinas = Kesehatan").unwrap().1,
            "Dinas = Kesehatan"
        );
        assert!(parse_filter("status").is_err());
        assert!(parse_filter("=active").is_err());
    }

    #[test]
    fn parses_list_command() {
        let cli = Cli::try_parse_from([
            "satudata",
            "list",
            "akun_kepala_dinas",
            "--filter",
            "status=active",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::List {
                resource, filters, ..
            } => {
                assert_eq!(resource, PortalResource::AkunKepalaDinas);
                assert_eq!(filters.len(), 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_resource() {
        assert!(Cli::try_parse_from(["satudata", "list", "parks"]).is_err());
    }
}
