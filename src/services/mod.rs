//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) so
//! collaborators can be swapped in tests.

mod user_service;

pub use user_service::{UserManager, UserService};
