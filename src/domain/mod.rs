//! Domain layer - Core business entities
//!
//! The `User` entity and the input shapes accepted by the user service.
//! Nothing here knows about the database or HTTP.

pub mod user;

pub use user::{CreateUser, UpdateUser, User};
