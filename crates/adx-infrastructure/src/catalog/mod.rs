//! Admin Catalog
//!
//! Concrete [`AdminPool`] and [`MetadataFactory`] backed by a declarative
//! catalog file describing admins and the validation metadata of their
//! model classes.
//!
//! ```toml
//! [[admins]]
//! code = "news.admin.post"
//! kind = "PostAdmin"
//! class = "News\\Entity\\Post"
//! model_manager = "OrmModelManager"
//! form_builder = "OrmFormContractor"
//! datagrid_builder = "OrmDatagridBuilder"
//! list_builder = "OrmListBuilder"
//!
//! [[admins.routes]]
//! name = "list"
//! path = "/news/list"
//!
//! [[validation]]
//! class = "News\\Entity\\Post"
//!
//! [[validation.properties]]
//! name = "title"
//! constraints = [{ kind = "NotBlank", groups = ["Default", "Create"] }]
//! ```
//!
//! [`AdminPool`]: adx_domain::ports::AdminPool
//! [`MetadataFactory`]: adx_domain::ports::MetadataFactory

pub mod loader;
pub mod manifest;
pub mod metadata;
pub mod pool;

pub use loader::{Catalog, CatalogLoader};
pub use manifest::{AdminDefinition, CatalogManifest, ClassDefinition, RouteDefinition};
pub use metadata::ConfiguredMetadataFactory;
pub use pool::{ConfiguredAdmin, ConfiguredAdminPool, ConfiguredComponent};
