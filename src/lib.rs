//! User Management API
//!
//! A REST API exposing CRUD operations over a single `User` resource,
//! built on Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `User` entity and its input shapes
//! - **services**: User use cases (existence semantics, notifications)
//! - **infra**: Database connection, schema sync, repository
//! - **notification**: Outgoing email collaborator
//! - **api**: HTTP handlers, extractors, routes and OpenAPI document
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Create the users table without serving
//! cargo run -- schema sync
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod notification;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUser, UpdateUser, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
