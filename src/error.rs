//! Error types for content-forge operations.
//!
//! Defines error types for the major subsystems:
//! - File access (reading, parsing, writing)
//! - Metadata lookup
//! - LLM API interactions

use thiserror::Error;

/// Errors that can occur while reading or writing files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl StorageError {
    /// Build an IO error, mapping `NotFound` to the dedicated variant.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound(path)
        } else {
            StorageError::Io { path, source }
        }
    }
}

/// Errors that can occur during metadata lookups.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("No metadata loaded")]
    NotLoaded,

    #[error("Category '{0}' not found in metadata")]
    CategoryNotFound(String),

    #[error("Item not found at index {index} in category {category}")]
    IndexOutOfRange { category: String, index: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: {0} environment variable not set")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("LLM response contained no text content")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_maps_not_found() {
        let err = StorageError::io(
            "missing.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, StorageError::NotFound(ref p) if p == "missing.md"));

        let err = StorageError::io(
            "locked.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.to_string().contains("locked.md"));
    }

    #[test]
    fn test_metadata_error_display() {
        let err = MetadataError::IndexOutOfRange {
            category: "Labs".to_string(),
            index: 7,
        };
        assert_eq!(err.to_string(), "Item not found at index 7 in category Labs");
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::ApiError {
            code: 401,
            message: "invalid x-api-key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): invalid x-api-key");

        let err = LlmError::MissingApiKey("ANTHROPIC_API_KEY".to_string());
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }
}
