//! Use Cases
//!
//! Implementations of the [`domain_services`](crate::domain_services) interfaces.

/// Admin explain report
pub mod explain_admin_service;

pub use explain_admin_service::{ExplainAdminServiceImpl, ExplainOptions};
