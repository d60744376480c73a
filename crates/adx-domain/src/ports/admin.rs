//! Admin Ports
//!
//! The admin pool resolves admin codes to admin services. An admin service
//! exposes its identity, its wiring (controller, model manager, builders),
//! routes, field descriptions and form themes.
//!
//! Collaborators report what they are through an explicit `kind()` accessor
//! rather than a runtime type name.

use crate::error::Result;
use crate::value_objects::{FieldDescriptionCollection, RouteCollection};
use std::fmt::Debug;
use std::sync::Arc;

/// Persistence-side collaborator of an admin
pub trait ModelManager: Send + Sync + Debug {
    /// Implementation kind, e.g. `OrmModelManager`
    fn kind(&self) -> &str;
}

/// Builds the admin's edit/create forms
pub trait FormBuilder: Send + Sync + Debug {
    /// Implementation kind
    fn kind(&self) -> &str;
}

/// Builds the admin's datagrid and filters
pub trait DatagridBuilder: Send + Sync + Debug {
    /// Implementation kind
    fn kind(&self) -> &str;
}

/// Builds the admin's list view
pub trait ListBuilder: Send + Sync + Debug {
    /// Implementation kind
    fn kind(&self) -> &str;
}

/// A configured admin service
pub trait AdminService: Send + Sync + Debug {
    /// Admin code (service identifier)
    fn code(&self) -> &str;

    /// Implementation kind of the admin itself
    fn kind(&self) -> &str;

    /// Managed model class
    fn class(&self) -> &str;

    /// Base controller name
    fn base_controller_name(&self) -> &str;

    /// Model manager collaborator
    fn model_manager(&self) -> &dyn ModelManager;

    /// Form builder collaborator
    fn form_builder(&self) -> &dyn FormBuilder;

    /// Datagrid builder collaborator
    fn datagrid_builder(&self) -> &dyn DatagridBuilder;

    /// List builder collaborator
    fn list_builder(&self) -> &dyn ListBuilder;

    /// Parent admin of a child admin
    fn parent(&self) -> Option<Arc<dyn AdminService>>;

    /// Whether this admin is attached to a parent admin
    fn is_child(&self) -> bool {
        self.parent().is_some()
    }

    /// Routes exposed by the admin
    fn routes(&self) -> &RouteCollection;

    /// Field descriptions of the list view
    fn list_field_descriptions(&self) -> &FieldDescriptionCollection;

    /// Field descriptions of the datagrid filters
    fn filter_field_descriptions(&self) -> &FieldDescriptionCollection;

    /// Form theme template paths, in order
    fn form_theme(&self) -> &[String];

    /// Field descriptions of the form view
    fn form_field_descriptions(&self) -> &FieldDescriptionCollection;
}

/// Registry of admin services
///
/// # Example
///
/// ```ignore
/// let admin = pool.get_instance("news.admin.post")?;
/// println!("{} manages {}", admin.code(), admin.class());
/// ```
pub trait AdminPool: Send + Sync {
    /// Resolve an admin by code
    ///
    /// Fails with [`Error::AdminNotFound`](crate::Error::AdminNotFound) for
    /// unknown codes.
    fn get_instance(&self, code: &str) -> Result<Arc<dyn AdminService>>;

    /// All registered admin codes, in registration order
    fn admin_codes(&self) -> Vec<String>;

    /// Whether a code is registered
    fn has_admin(&self, code: &str) -> bool {
        self.admin_codes().iter().any(|c| c == code)
    }
}
