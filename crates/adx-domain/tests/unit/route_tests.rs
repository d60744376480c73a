//! Route Tests

use adx_domain::constants::SONATA_NAME_DEFAULT;
use adx_domain::value_objects::{Route, RouteCollection};

#[test]
fn test_sonata_name_default() {
    let route = Route::new("/news/list").with_sonata_name("list");
    assert_eq!(route.sonata_name(), Some("list"));
    assert_eq!(route.default_value(SONATA_NAME_DEFAULT), Some("list"));
    assert_eq!(route.default_value("_controller"), None);
}

#[test]
fn test_route_without_defaults() {
    let route = Route::new("/news/{id}/edit");
    assert_eq!(route.sonata_name(), None);
    assert!(route.defaults.is_empty());
}

#[test]
fn test_collection_iterates_in_insertion_order() {
    let routes = RouteCollection::new()
        .with_route("news.admin.post.list", Route::new("/news/list"))
        .with_route("news.admin.post.edit", Route::new("/news/{id}/edit"));

    let paths: Vec<&str> = routes.elements().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/news/list", "/news/{id}/edit"]);
    assert!(routes.has("news.admin.post.edit"));
    assert!(!routes.has("news.admin.post.delete"));
}

#[test]
fn test_re_adding_route_keeps_position() {
    let mut routes = RouteCollection::new()
        .with_route("a", Route::new("/a"))
        .with_route("b", Route::new("/b"));
    routes.add("a", Route::new("/a2"));

    let paths: Vec<&str> = routes.elements().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/a2", "/b"]);
    assert_eq!(routes.len(), 2);
}

#[test]
fn test_empty_collection() {
    let routes = RouteCollection::new();
    assert!(routes.is_empty());
    assert_eq!(routes.elements().count(), 0);
}
