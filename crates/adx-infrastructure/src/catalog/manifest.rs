//! Catalog file schema

use crate::constants::DEFAULT_BASE_CONTROLLER;
use adx_domain::value_objects::{FieldDescription, MemberMetadata};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn default_controller() -> String {
    DEFAULT_BASE_CONTROLLER.to_string()
}

/// Root of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogManifest {
    /// Admin definitions in registration order
    pub admins: Vec<AdminDefinition>,
    /// Validation metadata per model class
    pub validation: Vec<ClassDefinition>,
}

/// One admin service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDefinition {
    /// Admin code
    pub code: String,
    /// Admin implementation kind
    pub kind: String,
    /// Managed model class
    pub class: String,
    /// Base controller name
    #[serde(default = "default_controller")]
    pub controller: String,
    /// Model manager kind
    pub model_manager: String,
    /// Form builder kind
    pub form_builder: String,
    /// Datagrid builder kind
    pub datagrid_builder: String,
    /// List builder kind
    pub list_builder: String,
    /// Code of the parent admin
    #[serde(default)]
    pub parent: Option<String>,
    /// Form theme templates
    #[serde(default)]
    pub form_theme: Vec<String>,
    /// Routes
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
    /// List view fields
    #[serde(default)]
    pub list_fields: Vec<FieldDescription>,
    /// Datagrid filter fields
    #[serde(default)]
    pub filter_fields: Vec<FieldDescription>,
    /// Form fields
    #[serde(default)]
    pub form_fields: Vec<FieldDescription>,
}

/// One admin route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Route name within the admin, stored as the `_sonata_name` default
    pub name: String,
    /// Path pattern
    pub path: String,
    /// Extra route defaults
    #[serde(default)]
    pub defaults: IndexMap<String, String>,
}

/// Validation metadata of one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Class name
    pub class: String,
    /// Property constraints
    #[serde(default)]
    pub properties: Vec<MemberMetadata>,
    /// Getter constraints
    #[serde(default)]
    pub getters: Vec<MemberMetadata>,
}
