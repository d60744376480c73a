//! Catalog-backed validation metadata

use super::manifest::{AdminDefinition, ClassDefinition};
use adx_domain::error::{Error, Result};
use adx_domain::ports::MetadataFactory;
use adx_domain::value_objects::{ClassMetadata, MemberMap, MemberMetadata};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Metadata factory over the `[[validation]]` entries of a catalog
///
/// Model classes of registered admins without a `[[validation]]` entry
/// resolve to empty metadata. Any other class is unknown.
#[derive(Debug, Default)]
pub struct ConfiguredMetadataFactory {
    classes: HashMap<String, Arc<ClassMetadata>>,
}

impl ConfiguredMetadataFactory {
    /// Build the factory from class definitions and admin definitions
    pub fn from_definitions(
        classes: &[ClassDefinition],
        admins: &[AdminDefinition],
    ) -> Result<Self> {
        let mut metadata = HashMap::new();
        for class in classes {
            if metadata.contains_key(&class.class) {
                return Err(Error::catalog(format!(
                    "Validation metadata for class \"{}\" is declared twice",
                    class.class
                )));
            }
            metadata.insert(class.class.clone(), Arc::new(class_metadata(class)?));
        }

        for admin in admins {
            metadata
                .entry(admin.class.clone())
                .or_insert_with(|| Arc::new(ClassMetadata::new(&admin.class)));
        }

        debug!(classes = metadata.len(), "Validation metadata indexed");
        Ok(Self { classes: metadata })
    }
}

fn class_metadata(definition: &ClassDefinition) -> Result<ClassMetadata> {
    Ok(ClassMetadata {
        class_name: definition.class.clone(),
        properties: member_map(&definition.class, "property", &definition.properties)?,
        getters: member_map(&definition.class, "getter", &definition.getters)?,
    })
}

fn member_map(class: &str, noun: &str, members: &[MemberMetadata]) -> Result<MemberMap> {
    let mut map = MemberMap::new();
    for member in members {
        if map.insert(member.name.clone(), member.clone()).is_some() {
            return Err(Error::catalog(format!(
                "Class \"{class}\" declares {noun} \"{}\" twice",
                member.name
            )));
        }
    }
    Ok(map)
}

impl MetadataFactory for ConfiguredMetadataFactory {
    fn metadata_for(&self, class: &str) -> Result<Arc<ClassMetadata>> {
        self.classes
            .get(class)
            .cloned()
            .ok_or_else(|| Error::metadata_resolution(class, "class is not known to the catalog"))
    }

    fn has_metadata_for(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }
}
