//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors that can occur while building catalog entities from raw data.
///
/// Constructing a specification never fails; these errors only arise when
/// parsing external labels into typed fields.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An MPAA rating label was not one of the known classifications
    #[error("Invalid MPAA rating label: {value}")]
    InvalidRating { value: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
