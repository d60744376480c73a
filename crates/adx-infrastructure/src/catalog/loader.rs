//! Catalog loading

use super::manifest::CatalogManifest;
use super::metadata::ConfiguredMetadataFactory;
use super::pool::ConfiguredAdminPool;
use crate::error_ext::ErrorContext;
use adx_domain::error::{Error, Result};
use adx_domain::ports::{AdminPool, MetadataFactory};
use figment::Figment;
use figment::providers::{Format, Json, Toml};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Admin pool and metadata factory built from one catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    pool: Arc<ConfiguredAdminPool>,
    metadata: Arc<ConfiguredMetadataFactory>,
}

impl Catalog {
    /// Build a catalog from a parsed manifest
    pub fn from_manifest(manifest: &CatalogManifest) -> Result<Self> {
        let pool = ConfiguredAdminPool::from_definitions(&manifest.admins)?;
        let metadata =
            ConfiguredMetadataFactory::from_definitions(&manifest.validation, &manifest.admins)?;
        Ok(Self {
            pool: Arc::new(pool),
            metadata: Arc::new(metadata),
        })
    }

    /// The admin pool port
    pub fn pool(&self) -> Arc<dyn AdminPool> {
        Arc::clone(&self.pool) as Arc<dyn AdminPool>
    }

    /// The metadata factory port
    pub fn metadata_factory(&self) -> Arc<dyn MetadataFactory> {
        Arc::clone(&self.metadata) as Arc<dyn MetadataFactory>
    }

    /// The concrete admin pool
    pub fn admin_pool(&self) -> &ConfiguredAdminPool {
        &self.pool
    }
}

/// Reads catalog files
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }

    /// Parse a catalog file into its manifest
    pub fn read_manifest(&self, path: &Path) -> Result<CatalogManifest> {
        if !path.is_file() {
            return Err(Error::catalog(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }

        let figment = if is_json(path) {
            Figment::from(Json::file(path))
        } else {
            Figment::from(Toml::file(path))
        };

        let manifest: CatalogManifest = figment
            .extract()
            .catalog_context(format!("Failed to parse catalog {}", path.display()))?;
        debug!(
            path = %path.display(),
            admins = manifest.admins.len(),
            classes = manifest.validation.len(),
            "Catalog parsed"
        );
        Ok(manifest)
    }

    /// Load and check a catalog file
    pub fn load(&self, path: &Path) -> Result<Catalog> {
        let manifest = self.read_manifest(path)?;
        let catalog = Catalog::from_manifest(&manifest)?;
        info!(path = %path.display(), "Catalog loaded");
        Ok(catalog)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
