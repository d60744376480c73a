//! Test utilities for adx-application
//!
//! In-memory fakes of the admin pool and metadata factory, plus the
//! `news.admin.post` fixture used across the explain tests.

#![allow(dead_code)]

use adx_domain::error::{Error, Result};
use adx_domain::ports::{
    AdminPool, AdminService, DatagridBuilder, FormBuilder, ListBuilder, MetadataFactory,
    ModelManager,
};
use adx_domain::value_objects::{
    ClassMetadata, Constraint, FieldDescription, FieldDescriptionCollection, Line, MemberMetadata,
    Route, RouteCollection,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Collaborator that only reports its kind
#[derive(Debug, Clone)]
pub struct FakeComponent(pub String);

impl ModelManager for FakeComponent {
    fn kind(&self) -> &str {
        &self.0
    }
}

impl FormBuilder for FakeComponent {
    fn kind(&self) -> &str {
        &self.0
    }
}

impl DatagridBuilder for FakeComponent {
    fn kind(&self) -> &str {
        &self.0
    }
}

impl ListBuilder for FakeComponent {
    fn kind(&self) -> &str {
        &self.0
    }
}

/// Admin service with public, directly editable state
#[derive(Debug, Clone)]
pub struct FakeAdmin {
    pub code: String,
    pub kind: String,
    pub class: String,
    pub controller: String,
    pub model_manager: FakeComponent,
    pub form_builder: FakeComponent,
    pub datagrid_builder: FakeComponent,
    pub list_builder: FakeComponent,
    pub parent: Option<Arc<FakeAdmin>>,
    pub routes: RouteCollection,
    pub list_fields: FieldDescriptionCollection,
    pub filter_fields: FieldDescriptionCollection,
    pub form_theme: Vec<String>,
    pub form_fields: FieldDescriptionCollection,
}

impl FakeAdmin {
    pub fn new(code: &str, class: &str) -> Self {
        Self {
            code: code.to_string(),
            kind: "News\\Admin\\PostAdmin".to_string(),
            class: class.to_string(),
            controller: "SonataAdminBundle:CRUD".to_string(),
            model_manager: FakeComponent("OrmModelManager".to_string()),
            form_builder: FakeComponent("OrmFormContractor".to_string()),
            datagrid_builder: FakeComponent("OrmDatagridBuilder".to_string()),
            list_builder: FakeComponent("OrmListBuilder".to_string()),
            parent: None,
            routes: RouteCollection::new(),
            list_fields: FieldDescriptionCollection::new(),
            filter_fields: FieldDescriptionCollection::new(),
            form_theme: Vec::new(),
            form_fields: FieldDescriptionCollection::new(),
        }
    }
}

impl AdminService for FakeAdmin {
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
            .clone()
            .map(|parent| parent as Arc<dyn AdminService>)
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

/// Pool over a fixed list of admins
#[derive(Default)]
pub struct FakePool {
    admins: Vec<Arc<FakeAdmin>>,
}

impl FakePool {
    pub fn with_admin(mut self, admin: FakeAdmin) -> Self {
        self.admins.push(Arc::new(admin));
        self
    }
}

impl AdminPool for FakePool {
    fn get_instance(&self, code: &str) -> Result<Arc<dyn AdminService>> {
        self.admins
            .iter()
            .find(|admin| admin.code == code)
            .map(|admin| Arc::clone(admin) as Arc<dyn AdminService>)
            .ok_or_else(|| Error::admin_not_found(code))
    }

    fn admin_codes(&self) -> Vec<String> {
        self.admins.iter().map(|admin| admin.code.clone()).collect()
    }
}

/// Metadata factory over a fixed map of classes
#[derive(Default)]
pub struct FakeMetadataFactory {
    classes: HashMap<String, Arc<ClassMetadata>>,
}

impl FakeMetadataFactory {
    pub fn with_metadata(mut self, metadata: ClassMetadata) -> Self {
        self.classes
            .insert(metadata.class_name.clone(), Arc::new(metadata));
        self
    }
}

impl MetadataFactory for FakeMetadataFactory {
    fn metadata_for(&self, class: &str) -> Result<Arc<ClassMetadata>> {
        self.classes
            .get(class)
            .cloned()
            .ok_or_else(|| Error::metadata_resolution(class, "class is not registered"))
    }

    fn has_metadata_for(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }
}

pub const POST_CLASS: &str = "News\\Entity\\Post";

/// The `news.admin.post` admin: two routes, no filters, one form theme
pub fn news_post_admin() -> FakeAdmin {
    let mut admin = FakeAdmin::new("news.admin.post", POST_CLASS);
    admin.routes = RouteCollection::new()
        .with_route(
            "news.admin.post.list",
            Route::new("/news/list").with_sonata_name("list"),
        )
        .with_route(
            "news.admin.post.edit",
            Route::new("/news/{id}/edit").with_sonata_name("edit"),
        );
    admin.list_fields = FieldDescriptionCollection::new()
        .with_field(
            FieldDescription::new("title")
                .with_type("string")
                .with_template("@Admin/list_string.html.twig"),
        )
        .with_field(FieldDescription::new("_action").with_type("actions"));
    admin.form_theme = vec!["@News/form_theme.html.twig".to_string()];
    admin.form_fields = FieldDescriptionCollection::new()
        .with_field(FieldDescription::new("title").with_type("text"));
    admin
}

/// Metadata with one `title` property constraint and no getters
pub fn news_post_metadata() -> ClassMetadata {
    ClassMetadata::new(POST_CLASS).with_property(
        MemberMetadata::new("title")
            .with_constraint(Constraint::new("NotBlank").with_groups(["Default", "Create"])),
    )
}

/// Plain text of every written line
pub fn plain_lines(lines: &[Line]) -> Vec<String> {
    lines.iter().map(Line::plain_text).collect()
}

/// Lines between a section header and the next blank line
pub fn section<'a>(lines: &'a [String], header: &str) -> Vec<&'a str> {
    lines
        .iter()
        .skip_while(|line| line.as_str() != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .map(String::as_str)
        .collect()
}
