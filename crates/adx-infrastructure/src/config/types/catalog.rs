//! Admin catalog configuration types

use figment::value::magic::RelativePathBuf;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the admin catalog is read from
///
/// A path set in a configuration file is resolved relative to that file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file (`.toml` or `.json`)
    pub path: Option<RelativePathBuf>,
}

impl CatalogConfig {
    /// Create a config pointing at a catalog file
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(RelativePathBuf::from(path.into())),
        }
    }

    /// Resolved catalog path
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.as_ref().map(RelativePathBuf::relative)
    }
}
