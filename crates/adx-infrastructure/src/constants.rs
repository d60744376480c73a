//! Infrastructure layer constants
//!
//! Report layout constants live in `adx_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "adx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "adx";

/// Environment variable prefix for configuration (`ADX__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "ADX";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level; the report owns stdout, so logs stay quiet by default
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_FILTER: &str = "ADX_LOG";

/// Default file name stem of the rolling log file
pub const LOG_FILE_STEM: &str = "adx";

// ============================================================================
// CATALOG CONSTANTS
// ============================================================================

/// Maximum number of alternatives offered for an unknown admin code
pub const MAX_ADMIN_SUGGESTIONS: usize = 3;

/// A registered code is an alternative when its edit distance to the
/// requested code is at most `requested.len() / ADMIN_SUGGESTION_DISTANCE_DIVISOR`
pub const ADMIN_SUGGESTION_DISTANCE_DIVISOR: usize = 3;

/// Base controller used when an admin definition omits one
pub const DEFAULT_BASE_CONTROLLER: &str = "CRUDController";
