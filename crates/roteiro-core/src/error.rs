//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a submitted trip leg is rejected.
///
/// Variants are reported in the order the checks run: a record with both a
/// missing field and a malformed date reports [`ValidationError::MissingField`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming whitespace
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },
    /// The category label is not one of the known activity types
    #[error("Unknown activity type '{value}'")]
    InvalidCategory { value: String },
    /// The date does not have the shape DD/MM/YYYY
    #[error("Invalid date '{value}': expected DD/MM/YYYY")]
    InvalidDate { value: String },
    /// The time does not have the shape HH:MM (24 hour clock)
    #[error("Invalid time '{value}': expected HH:MM in 24 hour format")]
    InvalidTime { value: String },
    /// Date and time are well formed but do not name a real moment
    #[error("Invalid date and time '{value}'")]
    InvalidDateTime { value: String },
}

/// Comprehensive error type for all itinerary operations.
#[derive(Error, Debug)]
pub enum RoteiroError {
    /// A submitted record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No record lives at the requested position
    #[error("No itinerary entry at position {index} (itinerary has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Catalog database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Place not found in the catalog for the given ID
    #[error("Place with ID {id} not found")]
    PlaceNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A destructive operation was requested without confirmation
    #[error("Refusing to {action} without confirmation")]
    ConfirmationRequired { action: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RoteiroError {
        RoteiroError::Database {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> RoteiroError {
        RoteiroError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RoteiroError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RoteiroError::database(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, RoteiroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MissingField { field: "origin" };
        assert_eq!(err.to_string(), "Field 'origin' is required");

        let err = ValidationError::InvalidDate {
            value: "2025-08-15".to_string(),
        };
        assert!(err.to_string().contains("DD/MM/YYYY"));
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: RoteiroError = ValidationError::InvalidTime {
            value: "25:00".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid time '25:00': expected HH:MM in 24 hour format"
        );
    }

    #[test]
    fn test_builders() {
        let err = RoteiroError::invalid_input("kind").with_reason("must not be empty");
        assert!(matches!(err, RoteiroError::InvalidInput { ref field, .. } if field == "kind"));

        let err = RoteiroError::database("Failed").with_source(rusqlite::Error::InvalidQuery);
        assert!(err.to_string().starts_with("Database error: Failed"));
    }
}
