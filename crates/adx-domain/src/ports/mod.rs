//! Domain Port Interfaces
//!
//! Read contracts of the administration system the explain report consumes,
//! and the sink the report is written to. Infrastructure implements them; the
//! application layer receives them as `Arc<dyn Trait>` through constructors.
//!
//! ## Organization
//!
//! - **admin** - Admin pool, admin services and their collaborators
//! - **validation** - Validation metadata factory
//! - **output** - Styled report output

/// Admin pool and admin service ports
pub mod admin;
/// Report output port
pub mod output;
/// Validation metadata port
pub mod validation;

pub use admin::{AdminPool, AdminService, DatagridBuilder, FormBuilder, ListBuilder, ModelManager};
pub use output::ReportOutput;
pub use validation::MetadataFactory;
