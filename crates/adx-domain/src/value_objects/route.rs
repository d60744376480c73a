use crate::constants::SONATA_NAME_DEFAULT;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single admin route: a path pattern plus its defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Path pattern, e.g. `/news/{id}/edit`
    pub path: String,
    /// Route defaults in declaration order
    #[serde(default)]
    pub defaults: IndexMap<String, String>,
}

impl Route {
    /// Create a route without defaults
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            defaults: IndexMap::new(),
        }
    }

    /// Set a route default
    pub fn with_default<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Set the admin-scoped route name (`_sonata_name` default)
    pub fn with_sonata_name<S: Into<String>>(self, name: S) -> Self {
        self.with_default(SONATA_NAME_DEFAULT, name)
    }

    /// Look up a route default
    pub fn default_value(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    /// The `_sonata_name` default, if set
    pub fn sonata_name(&self) -> Option<&str> {
        self.default_value(SONATA_NAME_DEFAULT)
    }
}

/// Ordered collection of an admin's routes, keyed by route code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCollection {
    elements: IndexMap<String, Route>,
}

impl RouteCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route; re-adding a code replaces the route but keeps its position
    pub fn add<S: Into<String>>(&mut self, code: S, route: Route) -> &mut Self {
        self.elements.insert(code.into(), route);
        self
    }

    /// Builder-style [`add`](Self::add)
    pub fn with_route<S: Into<String>>(mut self, code: S, route: Route) -> Self {
        self.add(code, route);
        self
    }

    /// Route for a code
    pub fn get(&self, code: &str) -> Option<&Route> {
        self.elements.get(code)
    }

    /// Whether a route code is registered
    pub fn has(&self, code: &str) -> bool {
        self.elements.contains_key(code)
    }

    /// Routes in insertion order
    pub fn elements(&self) -> impl Iterator<Item = &Route> {
        self.elements.values()
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the collection holds no routes
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
