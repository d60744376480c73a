//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for adx
#[derive(Error, Debug)]
pub enum Error {
    /// Admin code unknown to the admin pool
    #[error("Admin service \"{code}\" not found in admin pool.{}", did_you_mean(.alternatives))]
    AdminNotFound {
        /// The requested admin code
        code: String,
        /// Registered codes close to the requested one, best match first
        alternatives: Vec<String>,
    },

    /// No validation metadata could be obtained for a model class
    #[error("Cannot resolve validation metadata for class \"{class}\": {message}")]
    MetadataResolution {
        /// The model class that was looked up
        class: String,
        /// Description of the failure
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Admin catalog could not be loaded or is inconsistent
    #[error("Catalog error: {message}")]
    Catalog {
        /// Description of the catalog error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn did_you_mean(alternatives: &[String]) -> String {
    match alternatives {
        [] => String::new(),
        [only] => format!(" Did you mean \"{only}\"?"),
        [first, rest @ ..] => format!(
            " Did you mean \"{first}\" or one of those: [{}]?",
            rest.join(", ")
        ),
    }
}

// Resolution error creation methods
impl Error {
    /// Create an admin-not-found error without suggestions
    pub fn admin_not_found<S: Into<String>>(code: S) -> Self {
        Self::AdminNotFound {
            code: code.into(),
            alternatives: Vec::new(),
        }
    }

    /// Create an admin-not-found error listing close matches
    pub fn admin_not_found_with_alternatives<S: Into<String>>(
        code: S,
        alternatives: Vec<String>,
    ) -> Self {
        Self::AdminNotFound {
            code: code.into(),
            alternatives,
        }
    }

    /// Create a metadata resolution error
    pub fn metadata_resolution<C: Into<String>, M: Into<String>>(class: C, message: M) -> Self {
        Self::MetadataResolution {
            class: class.into(),
            message: message.into(),
        }
    }

    /// Whether this error is one of the two lookup failures of the explain report
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::AdminNotFound { .. } | Self::MetadataResolution { .. }
        )
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// Catalog, infrastructure and internal error creation methods
impl Error {
    /// Create a catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
            source: None,
        }
    }

    /// Create a catalog error with source
    pub fn catalog_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Catalog {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
