//! Dependency Injection
//!
//! All services are handed to the use case as `Arc<dyn Trait>`; this module
//! only does the wiring.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
