//! Configuration
//!
//! Figment-based configuration: defaults, then a TOML file, then
//! `ADX__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
