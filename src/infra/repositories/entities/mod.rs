//! SeaORM entity definitions
//!
//! Database-side shapes, kept apart from the domain `User`.

pub mod user;

pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
