//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns and the concrete adapters behind the
//! domain ports.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (TOML file + environment) |
//! | [`di`] | Composition root wiring the explain service |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Admin pool and metadata factory backed by a catalog file |
//! | [`output`] | Console rendering of report lines |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod catalog;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use error_ext::ErrorContext;
