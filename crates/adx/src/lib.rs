//! # adx
//!
//! Explains how an admin service is wired: its identity and collaborators,
//! routes, list, filter and form fields, form themes, and the validation
//! constraints declared on its model class.
//!
//! ## Example
//!
//! ```ignore
//! use adx::infrastructure::config::ConfigBuilder;
//! use adx::infrastructure::di::init_app;
//! use adx::domain::Line;
//!
//! let config = ConfigBuilder::new().with_catalog_path("catalog.toml").build();
//! let context = init_app(config)?;
//!
//! let mut lines: Vec<Line> = Vec::new();
//! context.explain_service().explain("news.admin.post", &mut lines)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Ports, value objects and errors
//! - `application` - The explain use case
//! - `infrastructure` - Configuration, logging, catalog adapters and console output
//! - `cli` - Command line entry point

/// Command line interface
pub mod cli;

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use adx_domain::*;
}

/// Application layer - explain use case
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use adx_application::*;
}

/// Infrastructure layer - config, logging, catalog and output
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use adx_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result};
