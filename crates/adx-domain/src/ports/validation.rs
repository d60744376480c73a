//! Validation Metadata Port

use crate::error::Result;
use crate::value_objects::ClassMetadata;
use std::sync::Arc;

/// Provides validation metadata per model class
pub trait MetadataFactory: Send + Sync {
    /// Metadata for a class
    ///
    /// Fails with [`Error::MetadataResolution`](crate::Error::MetadataResolution)
    /// when the class is unknown to the validation subsystem.
    fn metadata_for(&self, class: &str) -> Result<Arc<ClassMetadata>>;

    /// Whether metadata can be obtained for a class
    fn has_metadata_for(&self, class: &str) -> bool;
}
