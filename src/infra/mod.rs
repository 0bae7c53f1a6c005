//! Infrastructure layer - External systems integration
//!
//! Database connection handling and the user repository.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
