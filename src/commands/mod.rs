//! Commands module - CLI command implementations.

pub mod schema;
pub mod serve;
