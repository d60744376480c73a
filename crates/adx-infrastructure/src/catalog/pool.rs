//! Catalog-backed admin pool

use super::manifest::{AdminDefinition, RouteDefinition};
use crate::constants::{ADMIN_SUGGESTION_DISTANCE_DIVISOR, MAX_ADMIN_SUGGESTIONS};
use adx_domain::error::{Error, Result};
use adx_domain::ports::{
    AdminPool, AdminService, DatagridBuilder, FormBuilder, ListBuilder, ModelManager,
};
use adx_domain::value_objects::{
    FieldDescription, FieldDescriptionCollection, Route, RouteCollection,
};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Admin collaborator known only by its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredComponent {
    kind: String,
}

impl ConfiguredComponent {
    /// Create a component of the given kind
    pub fn new<S: Into<String>>(kind: S) -> Self {
        Self { kind: kind.into() }
    }
}

impl ModelManager for ConfiguredComponent {
    fn kind(&self) -> &str {
        &self.kind
    }
}

impl FormBuilder for ConfiguredComponent {
    fn kind(&self) -> &str {
        &self.kind
    }
}

impl DatagridBuilder for ConfiguredComponent {
    fn kind(&self) -> &str {
        &self.kind
    }
}

impl ListBuilder for ConfiguredComponent {
    fn kind(&self) -> &str {
        &self.kind
    }
}

/// Admin service built from a catalog definition
#[derive(Debug)]
pub struct ConfiguredAdmin {
    code: String,
    kind: String,
    class: String,
    controller: String,
    model_manager: ConfiguredComponent,
    form_builder: ConfiguredComponent,
    datagrid_builder: ConfiguredComponent,
    list_builder: ConfiguredComponent,
    parent: Option<Arc<ConfiguredAdmin>>,
    routes: RouteCollection,
    list_fields: FieldDescriptionCollection,
    filter_fields: FieldDescriptionCollection,
    form_theme: Vec<String>,
    form_fields: FieldDescriptionCollection,
}

impl ConfiguredAdmin {
    /// Build an admin from its definition and already-built parent
    pub fn from_definition(
        definition: &AdminDefinition,
        parent: Option<Arc<ConfiguredAdmin>>,
    ) -> Result<Self> {
        let code = definition.code.as_str();
        Ok(Self {
            code: definition.code.clone(),
            kind: definition.kind.clone(),
            class: definition.class.clone(),
            controller: definition.controller.clone(),
            model_manager: ConfiguredComponent::new(&definition.model_manager),
            form_builder: ConfiguredComponent::new(&definition.form_builder),
            datagrid_builder: ConfiguredComponent::new(&definition.datagrid_builder),
            list_builder: ConfiguredComponent::new(&definition.list_builder),
            parent,
            routes: build_routes(code, &definition.routes)?,
            list_fields: build_fields(code, "list_fields", &definition.list_fields)?,
            filter_fields: build_fields(code, "filter_fields", &definition.filter_fields)?,
            form_theme: definition.form_theme.clone(),
            form_fields: build_fields(code, "form_fields", &definition.form_fields)?,
        })
    }
}

fn build_routes(code: &str, definitions: &[RouteDefinition]) -> Result<RouteCollection> {
    let mut routes = RouteCollection::new();
    for definition in definitions {
        let route_code = format!("{code}.{}", definition.name);
        if routes.has(&route_code) {
            return Err(Error::catalog(format!(
                "Admin \"{code}\" declares route \"{}\" twice",
                definition.name
            )));
        }

        let mut route = Route::new(&definition.path).with_sonata_name(&definition.name);
        for (key, value) in &definition.defaults {
            route = route.with_default(key, value);
        }
        routes.add(route_code, route);
    }
    Ok(routes)
}

fn build_fields(
    code: &str,
    collection: &str,
    definitions: &[FieldDescription],
) -> Result<FieldDescriptionCollection> {
    let mut fields = FieldDescriptionCollection::new();
    for field in definitions {
        if fields.add(field.clone()).is_some() {
            return Err(Error::catalog(format!(
                "Admin \"{code}\" declares field \"{}\" twice in {collection}",
                field.name
            )));
        }
    }
    Ok(fields)
}

impl AdminService for ConfiguredAdmin {
    fn code(&self) -> &str {
        &self.code
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn class(&self) -> &str {
        &self.class
    }

    fn base_controller_name(&self) -> &str {
        &self.controller
    }

    fn model_manager(&self) -> &dyn ModelManager {
        &self.model_manager
    }

    fn form_builder(&self) -> &dyn FormBuilder {
        &self.form_builder
    }

    fn datagrid_builder(&self) -> &dyn DatagridBuilder {
        &self.datagrid_builder
    }

    fn list_builder(&self) -> &dyn ListBuilder {
        &self.list_builder
    }

    fn parent(&self) -> Option<Arc<dyn AdminService>> {
        self.parent
            .as_ref()
            .map(|parent| Arc::clone(parent) as Arc<dyn AdminService>)
    }

    fn routes(&self) -> &RouteCollection {
        &self.routes
    }

    fn list_field_descriptions(&self) -> &FieldDescriptionCollection {
        &self.list_fields
    }

    fn filter_field_descriptions(&self) -> &FieldDescriptionCollection {
        &self.filter_fields
    }

    fn form_theme(&self) -> &[String] {
        &self.form_theme
    }

    fn form_field_descriptions(&self) -> &FieldDescriptionCollection {
        &self.form_fields
    }
}

/// Admin pool over catalog definitions
///
/// Parents are built before their children; unknown parents and parent
/// cycles are rejected when the pool is built.
#[derive(Debug, Default)]
pub struct ConfiguredAdminPool {
    admins: IndexMap<String, Arc<ConfiguredAdmin>>,
}

impl ConfiguredAdminPool {
    /// Build the pool from admin definitions
    pub fn from_definitions(definitions: &[AdminDefinition]) -> Result<Self> {
        let mut by_code: IndexMap<&str, &AdminDefinition> = IndexMap::new();
        for definition in definitions {
            if by_code
                .insert(definition.code.as_str(), definition)
                .is_some()
            {
                return Err(Error::catalog(format!(
                    "Admin code \"{}\" is registered twice",
                    definition.code
                )));
            }
        }

        let mut built = HashMap::new();
        let mut admins = IndexMap::new();
        for &code in by_code.keys() {
            let admin = build_admin(code, &by_code, &mut built, &mut Vec::new())?;
            admins.insert(code.to_string(), admin);
        }

        debug!(admins = admins.len(), "Admin pool built");
        Ok(Self { admins })
    }

    /// Registered codes closest to `code`, best match first
    pub fn alternatives(&self, code: &str) -> Vec<String> {
        let threshold = code.len() / ADMIN_SUGGESTION_DISTANCE_DIVISOR;
        let mut scored: Vec<(usize, &String)> = self
            .admins
            .keys()
            .map(|candidate| (strsim::levenshtein(code, candidate), candidate))
            .filter(|(distance, candidate)| {
                *distance <= threshold || (!code.is_empty() && candidate.contains(code))
            })
            .collect();
        scored.sort_by_key(|(distance, _)| *distance);

        scored
            .into_iter()
            .take(MAX_ADMIN_SUGGESTIONS)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

fn build_admin<'a>(
    code: &'a str,
    definitions: &IndexMap<&'a str, &'a AdminDefinition>,
    built: &mut HashMap<&'a str, Arc<ConfiguredAdmin>>,
    chain: &mut Vec<&'a str>,
) -> Result<Arc<ConfiguredAdmin>> {
    if let Some(admin) = built.get(code) {
        return Ok(Arc::clone(admin));
    }
    if chain.contains(&code) {
        chain.push(code);
        return Err(Error::catalog(format!(
            "Admin parent cycle: {}",
            chain.join(" -> ")
        )));
    }

    let definition = definitions
        .get(code)
        .ok_or_else(|| Error::internal(format!("Admin \"{code}\" missing from catalog index")))?;

    let parent = match definition.parent.as_deref() {
        Some(parent_code) if parent_code == code => {
            return Err(Error::catalog(format!(
                "Admin \"{code}\" cannot be its own parent"
            )));
        }
        Some(parent_code) => {
            let Some((&parent_key, _)) = definitions.get_key_value(parent_code) else {
                return Err(Error::catalog(format!(
                    "Admin \"{code}\" refers to unknown parent \"{parent_code}\""
                )));
            };
            chain.push(code);
            let parent = build_admin(parent_key, definitions, built, chain)?;
            chain.pop();
            Some(parent)
        }
        None => None,
    };

    let admin = Arc::new(ConfiguredAdmin::from_definition(definition, parent)?);
    built.insert(code, Arc::clone(&admin));
    Ok(admin)
}

impl AdminPool for ConfiguredAdminPool {
    fn get_instance(&self, code: &str) -> Result<Arc<dyn AdminService>> {
        match self.admins.get(code) {
            Some(admin) => Ok(Arc::clone(admin) as Arc<dyn AdminService>),
            None => Err(Error::admin_not_found_with_alternatives(
                code,
                self.alternatives(code),
            )),
        }
    }

    fn admin_codes(&self) -> Vec<String> {
        self.admins.keys().cloned().collect()
    }

    fn has_admin(&self, code: &str) -> bool {
        self.admins.contains_key(code)
    }
}
