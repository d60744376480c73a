//! # Domain Layer
//!
//! Core contracts and types for the admin explain tool.
//!
//! The administration system that owns admins, routes, field descriptions and
//! validation metadata is external. This crate only describes the read
//! interfaces the explain report consumes, plus the value objects those
//! interfaces hand back.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | Collaborator traits (admin pool, metadata factory, report output) |
//! | [`value_objects`] | Routes, field descriptions, validation metadata, styled lines |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Report layout and well-known keys |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
