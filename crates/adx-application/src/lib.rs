//! Application Layer - adx
//!
//! Use cases of the admin explain tool, orchestrating the domain ports
//! without knowing which administration system backs them.
//!
//! ## Use Cases
//!
//! - Explaining an admin service: identity, wiring, routes, fields, form
//!   themes and validation constraints
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `adx-domain`: For port traits, value objects and errors
//! - `tracing`: For structured logging

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
