//! Domain Services
//!
//! Interfaces of the operations the application layer offers.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ExplainAdminServiceInterface`] | Writes the explain report of one admin |

/// Admin explain service interface
pub mod explain;

pub use explain::ExplainAdminServiceInterface;
