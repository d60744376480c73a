//! Composition Root
//!
//! Wires the catalog adapters into the explain use case.
//!
//! ```text
//! AppConfig → CatalogLoader → Catalog ─┬─ AdminPool
//!                                      └─ MetadataFactory → ExplainAdminServiceImpl
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config)?;
//! let mut lines = Vec::new();
//! context.explain_service().explain("news.admin.post", &mut lines)?;
//! ```

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::AppConfig;
use adx_application::domain_services::ExplainAdminServiceInterface;
use adx_application::use_cases::{ExplainAdminServiceImpl, ExplainOptions};
use adx_domain::error::{Error, Result};
use adx_domain::ports::{AdminPool, MetadataFactory};
use std::sync::Arc;
use tracing::info;

/// Application context holding the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pool: Arc<dyn AdminPool>,
    metadata_factory: Arc<dyn MetadataFactory>,
    explain_service: Arc<dyn ExplainAdminServiceInterface>,
}

impl AppContext {
    /// Build a context around an already loaded catalog
    pub fn from_catalog(config: AppConfig, catalog: &Catalog) -> Self {
        let pool = catalog.pool();
        let metadata_factory = catalog.metadata_factory();
        let options = ExplainOptions {
            validation_docs_url: config.output.validation_docs_url.clone(),
        };
        let explain_service: Arc<dyn ExplainAdminServiceInterface> = Arc::new(
            ExplainAdminServiceImpl::new(Arc::clone(&pool), Arc::clone(&metadata_factory))
                .with_options(options),
        );

        Self {
            config: Arc::new(config),
            pool,
            metadata_factory,
            explain_service,
        }
    }

    /// Admin pool
    pub fn pool(&self) -> Arc<dyn AdminPool> {
        Arc::clone(&self.pool)
    }

    /// Validation metadata factory
    pub fn metadata_factory(&self) -> Arc<dyn MetadataFactory> {
        Arc::clone(&self.metadata_factory)
    }

    /// Explain use case
    pub fn explain_service(&self) -> Arc<dyn ExplainAdminServiceInterface> {
        Arc::clone(&self.explain_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("catalog", &self.config.catalog.resolved_path())
            .field("admins", &self.pool.admin_codes().len())
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from configuration
///
/// Fails when no catalog is configured or the catalog cannot be loaded.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let path = config.catalog.resolved_path().ok_or_else(|| {
        Error::config("No admin catalog configured; pass --catalog or set catalog.path")
    })?;

    info!(catalog = %path.display(), "Initializing application context");
    let catalog = CatalogLoader::new().load(&path)?;
    let context = AppContext::from_catalog(config, &catalog);
    info!(admins = context.pool.admin_codes().len(), "Application context ready");
    Ok(context)
}
