//! Main application configuration

use super::{CatalogConfig, LoggingConfig, OutputConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Admin catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Console output configuration
    #[serde(default)]
    pub output: OutputConfig,
}
