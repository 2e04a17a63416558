//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the college dataset.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the dataset file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset file is not valid JSON (or does not match the record shape)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two records share the same name; names are the row key
    #[error("Duplicate college name: {name}")]
    DuplicateName { name: String },

    /// A record field had an invalid value
    #[error("Invalid value for {field} on '{college}': {value}")]
    InvalidValue {
        college: String,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
