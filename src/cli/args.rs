//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// User Management API - CRUD service for users
#[derive(Parser, Debug)]
#[command(name = "user-management-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Manage the database schema
    Schema(SchemaArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to SERVER_HOST from the configuration)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to SERVER_PORT from the configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub action: SchemaAction,
}

/// Schema actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    /// Create missing tables from the entity definitions
    Sync,
    /// Drop all tables and recreate them empty
    Reset,
    /// Check database connectivity
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "user-management-api",
            "serve",
            "--port",
            "8081",
            "-H",
            "127.0.0.1",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8081));
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_without_flags_leaves_address_to_config() {
        let cli = Cli::try_parse_from(["user-management-api", "serve"]).unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_schema_reset_with_global_verbose() {
        let cli =
            Cli::try_parse_from(["user-management-api", "schema", "reset", "--verbose"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Schema(args) => assert_eq!(args.action, SchemaAction::Reset),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["user-management-api", "generate"]).is_err());
    }
}
