//! Version Resolution Errors
//!
//! One error type covers the whole activation: configuration problems, the
//! per-strategy failures and the IO underneath them. Every variant is fatal
//! to the build; there is no fallback source.

use std::path::PathBuf;

/// Result type alias for version resolution
pub type VersionResult<T> = std::result::Result<T, VersionError>;

#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Missing or invalid `[tool.poetry-version]` configuration
    #[error("Invalid [tool.poetry-version] configuration: {message}")]
    Configuration { message: String },

    /// The manifest itself could not be read or parsed
    #[error("Could not load manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// More than one package include, so the version module cannot be inferred
    #[error("More than one package set ({count}), cannot extract dynamic version")]
    AmbiguousPackage { count: usize },

    /// An expected file is absent
    #[error("{what} file not found at {}, cannot extract dynamic version", path.display())]
    FileNotFound { what: String, path: PathBuf },

    /// The source file does not parse
    #[error("Could not parse {}: syntax error at line {line}, column {column}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    /// The syntax-tree parser could not be set up
    #[error("Python parser unavailable: {message}")]
    Parser { message: String },

    /// No top-level `__version__` string literal assignment
    #[error("No valid __version__ variable found in {}, cannot extract dynamic version", path.display())]
    VersionNotFound { path: PathBuf },

    /// HEAD carries no exact tag
    #[error("No Git tag found, not extracting dynamic version")]
    NoTag { status: Option<i32> },

    /// The git executable is not on PATH
    #[error("Git executable not found, cannot extract dynamic version from tags")]
    GitUnavailable {
        #[source]
        source: which::Error,
    },

    /// The configured `match` expression does not compile
    #[error("Invalid match pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The configured `match` expression found nothing in the file
    #[error("Pattern '{pattern}' did not match the contents of {}", path.display())]
    NoMatch { pattern: String, path: PathBuf },

    /// A strategy produced an empty string
    #[error("Version resolved from {origin} is empty, cannot set dynamic version")]
    EmptyVersion { origin: String },

    /// IO failure underneath a strategy
    #[error("IO error during {operation} on {}", path.display())]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VersionError {
    pub fn configuration(message: impl Into<String>) -> Self {
        VersionError::Configuration {
            message: message.into(),
        }
    }

    pub fn io(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        VersionError::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

impl crate::core::error_handling::ContextualError for VersionError {
    fn is_user_actionable(&self) -> bool {
        !matches!(
            self,
            VersionError::Io { .. }
                | VersionError::GitUnavailable { .. }
                | VersionError::Parser { .. }
        )
    }

    fn user_message(&self) -> Option<String> {
        if self.is_user_actionable() {
            Some(self.to_string())
        } else {
            None
        }
    }
}
