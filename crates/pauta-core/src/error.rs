//! Error types for the content planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PautaError {
    /// File system operation errors on the data directory
    #[error("Storage error at path '{path}': {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// No API credential is configured for content generation
    #[error(
        "OpenAI API key not configured: set OPENAI_API_KEY in the environment \
         to enable AI-assisted idea generation"
    )]
    MissingApiKey,
    /// The content-generation API rejected the request for quota reasons
    #[error("OpenAI quota exceeded: {message}")]
    QuotaExceeded { message: String },
    /// Any other content-generation failure (no fallback content produced)
    #[error("Content generation failed: {message}")]
    ContentGeneration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PautaError {
        PautaError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PautaError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a storage error for a path.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// True when the failure should degrade to demo content instead of
    /// propagating (missing credential or quota/rate-limit shaped).
    pub fn is_demo_fallback(&self) -> bool {
        matches!(
            self,
            PautaError::MissingApiKey | PautaError::QuotaExceeded { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PautaError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PautaError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Specialized extension trait for file-system Results on the data
/// directory.
pub trait StorageResultExt<T> {
    /// Map I/O errors to storage errors tagged with the offending path.
    fn storage_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, std::io::Error> {
    fn storage_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| PautaError::storage(path, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PautaError>;
