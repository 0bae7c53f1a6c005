//! Application configuration.
//!
//! `Config` is read once at startup from the environment; defaults and
//! other fixed values live in `constants`.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
