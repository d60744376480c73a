//! Admin Explain Use Case
//!
//! Resolves an admin from the pool and the validation metadata of its model
//! class, then writes a fixed sequence of report sections:
//!
//! ```text
//! AdminBundle Information      identity and wiring
//! Routes                       one line per route
//! Datagrid Columns             list field descriptions
//! Datagrid Filters             filter field descriptions
//! Form theme(s)                one line per template
//! Form Fields                  form field descriptions
//! Validation Framework         property and getter constraints
//! done!
//! ```

use crate::domain_services::ExplainAdminServiceInterface;
use adx_domain::constants::{
    CONSTRAINT_KIND_WIDTH, FIELD_COLUMN_WIDTH, IDENTITY_LABEL_WIDTH, NAME_COLUMN_WIDTH,
    PARENT_LABEL_WIDTH,
};
use adx_domain::error::Result;
use adx_domain::ports::{AdminPool, AdminService, MetadataFactory, ReportOutput};
use adx_domain::value_objects::{FieldDescriptionCollection, Line, MemberMap, MemberMetadata};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Presentation options of the explain report
#[derive(Debug, Clone, Default)]
pub struct ExplainOptions {
    /// Link printed next to the "Validation Framework" banner
    pub validation_docs_url: Option<String>,
}

/// Explain service backed by an admin pool and a metadata factory
pub struct ExplainAdminServiceImpl {
    pool: Arc<dyn AdminPool>,
    metadata_factory: Arc<dyn MetadataFactory>,
    options: ExplainOptions,
}

impl ExplainAdminServiceImpl {
    /// Create new explain service with injected dependencies
    pub fn new(pool: Arc<dyn AdminPool>, metadata_factory: Arc<dyn MetadataFactory>) -> Self {
        Self {
            pool,
            metadata_factory,
            options: ExplainOptions::default(),
        }
    }

    /// Replace the presentation options
    pub fn with_options(mut self, options: ExplainOptions) -> Self {
        self.options = options;
        self
    }

    fn write_identity(admin: &dyn AdminService, output: &mut dyn ReportOutput) -> Result<()> {
        output.write_line(&Line::new().comment("AdminBundle Information"))?;

        let rows = [
            ("id", admin.code()),
            ("Admin", admin.kind()),
            ("Model", admin.class()),
            ("Controller", admin.base_controller_name()),
            ("Model Manager", admin.model_manager().kind()),
            ("Form Builder", admin.form_builder().kind()),
            ("Datagrid Builder", admin.datagrid_builder().kind()),
            ("List Builder", admin.list_builder().kind()),
        ];
        for (label, value) in rows {
            output.write_line(&labelled(label, IDENTITY_LABEL_WIDTH, value))?;
        }

        if admin.is_child()
            && let Some(parent) = admin.parent()
        {
            output.write_line(&labelled("Parent", PARENT_LABEL_WIDTH, parent.code()))?;
        }
        Ok(())
    }

    fn write_routes(admin: &dyn AdminService, output: &mut dyn ReportOutput) -> Result<()> {
        section_header(output, "Routes")?;
        for route in admin.routes().elements() {
            output.write_line(&Line::plain(format!(
                "  - {:<width$} {}",
                route.sonata_name().unwrap_or_default(),
                route.path,
                width = NAME_COLUMN_WIDTH
            )))?;
        }
        Ok(())
    }

    fn write_form_theme(admin: &dyn AdminService, output: &mut dyn ReportOutput) -> Result<()> {
        section_header(output, "Form theme(s)")?;
        for template in admin.form_theme() {
            output.write_line(&Line::plain(format!("  - {template}")))?;
        }
        Ok(())
    }

    fn write_validation_banner(&self, output: &mut dyn ReportOutput) -> Result<()> {
        output.write_blank()?;
        let mut banner = Line::new().comment("Validation Framework");
        if let Some(url) = &self.options.validation_docs_url {
            banner = banner.text(format!(" - {url}"));
        }
        output.write_line(&banner)
    }
}

impl ExplainAdminServiceInterface for ExplainAdminServiceImpl {
    fn explain(&self, code: &str, output: &mut dyn ReportOutput) -> Result<()> {
        let admin = self.pool.get_instance(code)?;
        debug!(code = admin.code(), class = admin.class(), "Admin resolved");

        Self::write_identity(admin.as_ref(), output)?;
        Self::write_routes(admin.as_ref(), output)?;
        write_fields(output, "Datagrid Columns", admin.list_field_descriptions())?;
        write_fields(output, "Datagrid Filters", admin.filter_field_descriptions())?;
        Self::write_form_theme(admin.as_ref(), output)?;
        write_fields(output, "Form Fields", admin.form_field_descriptions())?;

        let metadata = self.metadata_factory.metadata_for(admin.class())?;
        debug!(
            class = metadata.class_name.as_str(),
            properties = metadata.properties.len(),
            getters = metadata.getters.len(),
            "Validation metadata resolved"
        );

        self.write_validation_banner(output)?;
        output.write_line(&Line::new().info("Properties constraints"))?;
        write_constraints(output, &metadata.properties, "property")?;

        section_header(output, "Getters constraints")?;
        write_constraints(output, &metadata.getters, "getter")?;

        output.write_blank()?;
        output.write_line(&Line::new().info("done!"))?;

        info!(code = admin.code(), "Admin explained");
        Ok(())
    }
}

fn labelled(label: &str, width: usize, value: &str) -> Line {
    Line::new()
        .info(format!("{label:<width$}"))
        .text(format!(" : {value}"))
}

fn section_header(output: &mut dyn ReportOutput, title: &str) -> Result<()> {
    output.write_blank()?;
    output.write_line(&Line::new().info(title))
}

fn write_fields(
    output: &mut dyn ReportOutput,
    title: &str,
    fields: &FieldDescriptionCollection,
) -> Result<()> {
    section_header(output, title)?;
    for (name, field) in fields.iter() {
        output.write_line(&Line::plain(format!(
            "  - {:<name_width$}  {:<field_width$} {:<field_width$}",
            name,
            field.field_type.as_deref().unwrap_or_default(),
            field.template.as_deref().unwrap_or_default(),
            name_width = NAME_COLUMN_WIDTH,
            field_width = FIELD_COLUMN_WIDTH
        )))?;
    }
    Ok(())
}

fn write_constraints(output: &mut dyn ReportOutput, members: &MemberMap, noun: &str) -> Result<()> {
    if members.is_empty() {
        warn!("No {noun} constraints defined");
        return output.write_line(
            &Line::new()
                .text("    ")
                .error(format!("no {noun} constraints defined !!")),
        );
    }

    for (name, member) in members {
        output.write_line(&Line::plain(format!("  - {name}")))?;
        write_member_constraints(output, member)?;
    }
    Ok(())
}

fn write_member_constraints(output: &mut dyn ReportOutput, member: &MemberMetadata) -> Result<()> {
    for constraint in &member.constraints {
        output.write_line(&Line::plain(format!(
            "    {:<width$} {}",
            constraint.kind,
            constraint.joined_groups(),
            width = CONSTRAINT_KIND_WIDTH
        )))?;
    }
    Ok(())
}
