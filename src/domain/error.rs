//! Error types for the catalog browser.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Only feed loading can fail in a way the user sees: any failure while fetching or
//! parsing one of the three feeds collapses into a single data-load failure at the
//! view model boundary. Lookup misses, empty galleries and unknown modal targets
//! never produce an error; they fall back to placeholder text or do nothing.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use dinescope::CatalogError;
///
/// fn fetch() -> Result<(), CatalogError> {
///     Err(CatalogError::DataLoad("zones feed missing".to_string()))
/// }
///
/// assert!(fetch().unwrap_err().is_data_load());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A feed could not be fetched.
    ///
    /// The string names the feed and what went wrong.
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// Filesystem operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A feed body was fetched but is not valid JSON for its schema.
    #[error("Failed to parse {feed} feed: {source}")]
    Parse {
        /// Name of the feed that failed to parse.
        feed: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns `true` for failures that make the catalog data unavailable.
    ///
    /// Fetch, I/O and parse failures all count: partial loads are never used.
    #[must_use]
    pub const fn is_data_load(&self) -> bool {
        matches!(self, Self::DataLoad(_) | Self::Io(_) | Self::Parse { .. })
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
