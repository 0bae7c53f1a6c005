//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `schema` - Create, reset or check the database schema

pub mod args;

pub use args::{Cli, Commands};
