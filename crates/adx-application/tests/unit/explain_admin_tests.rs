//! Explain Admin Service Tests

use crate::test_utils::{
    FakeAdmin, FakeMetadataFactory, FakePool, POST_CLASS, news_post_admin, news_post_metadata,
    plain_lines, section,
};
use adx_application::domain_services::ExplainAdminServiceInterface;
use adx_application::use_cases::{ExplainAdminServiceImpl, ExplainOptions};
use adx_domain::error::Error;
use adx_domain::value_objects::{
    ClassMetadata, Constraint, FieldDescription, Line, MemberMetadata, Tag,
};
use std::sync::Arc;

fn service(pool: FakePool, metadata: FakeMetadataFactory) -> ExplainAdminServiceImpl {
    ExplainAdminServiceImpl::new(Arc::new(pool), Arc::new(metadata))
}

fn news_service() -> ExplainAdminServiceImpl {
    service(
        FakePool::default().with_admin(news_post_admin()),
        FakeMetadataFactory::default().with_metadata(news_post_metadata()),
    )
}

fn explain(service: &ExplainAdminServiceImpl, code: &str) -> (Vec<Line>, Result<(), Error>) {
    let mut lines: Vec<Line> = Vec::new();
    let result = service.explain(code, &mut lines);
    (lines, result)
}

fn identity(label: &str, value: &str) -> String {
    format!("{label:<20} : {value}")
}

#[test]
fn test_unknown_admin_fails_before_any_output() {
    let (lines, result) = explain(&news_service(), "news.admin.missing");

    assert!(matches!(result, Err(Error::AdminNotFound { ref code, .. }) if code == "news.admin.missing"));
    assert!(lines.is_empty());
}

#[test]
fn test_identity_block_fields_in_fixed_order() {
    let (lines, result) = explain(&news_service(), "news.admin.post");
    result.expect("explain should succeed");
    let text = plain_lines(&lines);

    assert_eq!(text[0], "AdminBundle Information");
    assert_eq!(
        section(&text, "AdminBundle Information"),
        [
            identity("id", "news.admin.post"),
            identity("Admin", "News\\Admin\\PostAdmin"),
            identity("Model", POST_CLASS),
            identity("Controller", "SonataAdminBundle:CRUD"),
            identity("Model Manager", "OrmModelManager"),
            identity("Form Builder", "OrmFormContractor"),
            identity("Datagrid Builder", "OrmDatagridBuilder"),
            identity("List Builder", "OrmListBuilder"),
        ]
    );
}

#[test]
fn test_identity_labels_are_info_tagged_and_padded() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let id_line = &lines[1];

    assert_eq!(id_line.spans[0].tag, Some(Tag::Info));
    assert_eq!(id_line.spans[0].text, "id                  ");
    assert_eq!(id_line.spans[1].tag, None);
    assert_eq!(id_line.spans[1].text, " : news.admin.post");
    assert!(lines[0].has_tag(Tag::Comment));
}

#[test]
fn test_child_admin_prints_parent_code() {
    let parent = FakeAdmin::new("news.admin.blog", "News\\Entity\\Blog");
    let mut child = news_post_admin();
    child.parent = Some(Arc::new(parent.clone()));

    let service = service(
        FakePool::default().with_admin(parent).with_admin(child),
        FakeMetadataFactory::default().with_metadata(news_post_metadata()),
    );
    let (lines, result) = explain(&service, "news.admin.post");
    result.expect("explain should succeed");
    let text = plain_lines(&lines);

    let block = section(&text, "AdminBundle Information");
    assert_eq!(block.len(), 9);
    assert_eq!(block[8], format!("{:<15} : news.admin.blog", "Parent"));
}

#[test]
fn test_top_level_admin_has_no_parent_line() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);

    assert!(!text.iter().any(|line| line.starts_with("Parent")));
}

#[test]
fn test_routes_follow_collection_order() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);

    assert_eq!(
        section(&text, "Routes"),
        [
            "  - list                      /news/list",
            "  - edit                      /news/{id}/edit",
        ]
    );
}

#[test]
fn test_datagrid_columns_print_name_type_and_template() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);

    assert_eq!(
        section(&text, "Datagrid Columns"),
        [
            format!(
                "  - {:<25}  {:<15} {:<15}",
                "title", "string", "@Admin/list_string.html.twig"
            ),
            format!("  - {:<25}  {:<15} {:<15}", "_action", "actions", ""),
        ]
    );
}

#[test]
fn test_empty_datagrid_filters_print_header_only() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);

    assert!(text.iter().any(|line| line == "Datagrid Filters"));
    assert!(section(&text, "Datagrid Filters").is_empty());
    assert!(!lines.iter().any(|line| {
        line.has_tag(Tag::Error) && line.plain_text().contains("filter")
    }));
}

#[test]
fn test_form_theme_and_form_fields() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);

    assert_eq!(
        section(&text, "Form theme(s)"),
        ["  - @News/form_theme.html.twig"]
    );
    assert_eq!(
        section(&text, "Form Fields"),
        [format!("  - {:<25}  {:<15} {:<15}", "title", "text", "")]
    );
}

#[test]
fn test_form_themes_print_in_declared_order() {
    let mut admin = news_post_admin();
    admin.form_theme = vec![
        "@News/form_theme.html.twig".to_string(),
        "@Admin/fields.html.twig".to_string(),
        "@App/a_last_theme.html.twig".to_string(),
    ];
    let service = service(
        FakePool::default().with_admin(admin),
        FakeMetadataFactory::default().with_metadata(news_post_metadata()),
    );

    let (lines, result) = explain(&service, "news.admin.post");
    assert!(result.is_ok());
    assert_eq!(
        section(&plain_lines(&lines), "Form theme(s)"),
        [
            "  - @News/form_theme.html.twig",
            "  - @Admin/fields.html.twig",
            "  - @App/a_last_theme.html.twig",
        ]
    );
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);
    let position = |header: &str| {
        text.iter()
            .position(|line| line == header)
            .unwrap_or_else(|| panic!("missing section {header}"))
    };

    let order = [
        position("AdminBundle Information"),
        position("Routes"),
        position("Datagrid Columns"),
        position("Datagrid Filters"),
        position("Form theme(s)"),
        position("Form Fields"),
        position("Validation Framework"),
        position("Properties constraints"),
        position("Getters constraints"),
        position("done!"),
    ];
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(text.last().map(String::as_str), Some("done!"));
}

#[test]
fn test_property_constraints_list_kind_and_groups() {
    let (lines, _) = explain(&news_service(), "news.admin.post");
    let text = plain_lines(&lines);

    let properties = section(&text, "Properties constraints");
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0], "  - title");
    assert_eq!(properties[1], format!("    {:<70} Default|Create", "NotBlank"));
}

#[test]
fn test_empty_getters_print_warning() {
    let (lines, result) = explain(&news_service(), "news.admin.post");
    result.expect("empty getters are not an error");
    let text = plain_lines(&lines);

    assert_eq!(
        section(&text, "Getters constraints"),
        ["    no getter constraints defined !!"]
    );
    let warning = lines
        .iter()
        .find(|line| line.plain_text().contains("no getter constraints"))
        .expect("warning line");
    assert!(warning.has_tag(Tag::Error));
}

#[test]
fn test_empty_properties_print_warning() {
    let service = service(
        FakePool::default().with_admin(news_post_admin()),
        FakeMetadataFactory::default().with_metadata(
            ClassMetadata::new(POST_CLASS).with_getter(
                MemberMetadata::new("publishable")
                    .with_constraint(Constraint::new("IsTrue"))
                    .with_constraint(Constraint::new("NotNull").with_groups(["Publish"])),
            ),
        ),
    );
    let (lines, result) = explain(&service, "news.admin.post");
    result.expect("explain should succeed");
    let text = plain_lines(&lines);

    assert_eq!(
        section(&text, "Properties constraints"),
        ["    no property constraints defined !!"]
    );
    assert_eq!(
        section(&text, "Getters constraints"),
        [
            "  - publishable".to_string(),
            format!("    {:<70} Default", "IsTrue"),
            format!("    {:<70} Publish", "NotNull"),
        ]
    );
}

#[test]
fn test_metadata_failure_keeps_earlier_sections() {
    let service = service(
        FakePool::default().with_admin(news_post_admin()),
        FakeMetadataFactory::default(),
    );
    let (lines, result) = explain(&service, "news.admin.post");
    let text = plain_lines(&lines);

    assert!(matches!(result, Err(Error::MetadataResolution { ref class, .. }) if class == POST_CLASS));
    assert!(text.iter().any(|line| line == "Form Fields"));
    assert!(!text.iter().any(|line| line.starts_with("Validation Framework")));
    assert!(!text.iter().any(|line| line == "done!"));
}

#[test]
fn test_validation_banner_includes_docs_url() {
    let service = news_service().with_options(ExplainOptions {
        validation_docs_url: Some("https://example.org/validation".to_string()),
    });
    let (lines, _) = explain(&service, "news.admin.post");
    let text = plain_lines(&lines);

    assert!(
        text.iter()
            .any(|line| line == "Validation Framework - https://example.org/validation")
    );
}

#[test]
fn test_missing_route_name_prints_blank_column() {
    let mut admin = news_post_admin();
    admin.routes = adx_domain::value_objects::RouteCollection::new().with_route(
        "news.admin.post.show",
        adx_domain::value_objects::Route::new("/news/{id}/show"),
    );
    admin.form_fields = adx_domain::value_objects::FieldDescriptionCollection::new()
        .with_field(FieldDescription::new("body"));
    let service = service(
        FakePool::default().with_admin(admin),
        FakeMetadataFactory::default().with_metadata(news_post_metadata()),
    );
    let (lines, _) = explain(&service, "news.admin.post");
    let text = plain_lines(&lines);

    assert_eq!(
        section(&text, "Routes"),
        [format!("  - {:<25} /news/{{id}}/show", "")]
    );
    assert_eq!(
        section(&text, "Form Fields"),
        [format!("  - {:<25}  {:<15} {:<15}", "body", "", "")]
    );
}
