//! Error types for the catalog crate.
//!
//! Loading a catalog touches the filesystem and parses JSON written by
//! hand, so every failure carries the file or record it came from.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A fixture file is not valid JSON or does not match the expected shape
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A record refers to an entity that is not in the catalog
    /// (e.g. a club pointing at an unknown category)
    #[error("Missing reference from {from}: {entity} with id {id}")]
    MissingReference {
        from: String,
        entity: String,
        id: String,
    },

    /// Two records of the same kind share an id or slug
    #[error("Duplicate {entity} {field}: {value}")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
