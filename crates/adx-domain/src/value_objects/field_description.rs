use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Describes one field of a list, filter or form view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Field name
    pub name: String,
    /// Type tag (e.g. `text`, `datetime`, `doctrine_orm_string`)
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    /// Template path used to render the field
    #[serde(default)]
    pub template: Option<String>,
}

impl FieldDescription {
    /// Create a field description with no type or template
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            field_type: None,
            template: None,
        }
    }

    /// Set the type tag
    pub fn with_type<S: Into<String>>(mut self, field_type: S) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    /// Set the template path
    pub fn with_template<S: Into<String>>(mut self, template: S) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Field descriptions keyed by name, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptionCollection {
    elements: IndexMap<String, FieldDescription>,
}

impl FieldDescriptionCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field description under its own name
    ///
    /// Returns the previous description registered under that name, if any.
    pub fn add(&mut self, field: FieldDescription) -> Option<FieldDescription> {
        self.elements.insert(field.name.clone(), field)
    }

    /// Builder-style [`add`](Self::add)
    pub fn with_field(mut self, field: FieldDescription) -> Self {
        self.add(field);
        self
    }

    /// Field description by name
    pub fn get(&self, name: &str) -> Option<&FieldDescription> {
        self.elements.get(name)
    }

    /// `(name, description)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescription)> {
        self.elements.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the collection holds no fields
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
