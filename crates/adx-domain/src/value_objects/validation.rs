use crate::constants::{DEFAULT_VALIDATION_GROUP, VALIDATION_GROUP_SEPARATOR};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn default_groups() -> Vec<String> {
    vec![DEFAULT_VALIDATION_GROUP.to_string()]
}

/// A validation constraint attached to a property or getter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint kind, e.g. `NotBlank` or `Length`
    pub kind: String,
    /// Validation groups the constraint applies to
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,
}

impl Constraint {
    /// Create a constraint in the default group
    pub fn new<S: Into<String>>(kind: S) -> Self {
        Self {
            kind: kind.into(),
            groups: default_groups(),
        }
    }

    /// Replace the constraint's groups
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Groups joined with `|`
    pub fn joined_groups(&self) -> String {
        self.groups.join(VALIDATION_GROUP_SEPARATOR)
    }
}

/// Constraints declared on one class member (property or getter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMetadata {
    /// Member name
    pub name: String,
    /// Constraints in declaration order
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl MemberMetadata {
    /// Create member metadata without constraints
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// Append a constraint
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Member metadata keyed by member name, in declaration order
pub type MemberMap = IndexMap<String, MemberMetadata>;

/// Validation metadata of a model class
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Fully qualified class name
    pub class_name: String,
    /// Property-level constraints keyed by property name
    pub properties: MemberMap,
    /// Getter-level constraints keyed by getter name
    pub getters: MemberMap,
}

impl ClassMetadata {
    /// Create empty metadata for a class
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
            properties: MemberMap::new(),
            getters: MemberMap::new(),
        }
    }

    /// Add (or replace) property metadata
    pub fn with_property(mut self, member: MemberMetadata) -> Self {
        self.properties.insert(member.name.clone(), member);
        self
    }

    /// Add (or replace) getter metadata
    pub fn with_getter(mut self, member: MemberMetadata) -> Self {
        self.getters.insert(member.name.clone(), member);
        self
    }

    /// Whether neither properties nor getters carry metadata
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.getters.is_empty()
    }
}
