//! Error types for the search crate.
//!
//! The matching, search, suggestion and recommendation functions are total and
//! never fail. Errors only arise at the edges: loading configuration and
//! catalogs, or naming a field that does not exist.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file is not valid TOML
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Unknown field name for a record type
    #[error("Unknown field: {0}")]
    InvalidField(String),

    /// Catalog JSON could not be decoded
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code for integration with the platform error handling.
/// Range: 12xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Configuration values are out of range
    InvalidConfig = 12001,
    /// Configuration file is not valid TOML
    ConfigParsing = 12002,
    /// Unknown field name
    InvalidField = 12003,
    /// Catalog JSON could not be decoded
    CatalogParsing = 12004,
    /// Reading a file failed
    Io = 12005,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::Config(_) => SearchErrorCode::InvalidConfig,
            SearchError::ConfigParse(_) => SearchErrorCode::ConfigParsing,
            SearchError::InvalidField(_) => SearchErrorCode::InvalidField,
            SearchError::Catalog(_) => SearchErrorCode::CatalogParsing,
            SearchError::Io(_) => SearchErrorCode::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SearchError::Config("max".into()).code(),
            SearchErrorCode::InvalidConfig
        );
        assert_eq!(
            SearchError::InvalidField("price".into()).code() as u32,
            12003
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: SearchError = serde_json::from_str::<Vec<i64>>("[1,")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), SearchErrorCode::CatalogParsing);
        assert!(err.to_string().starts_with("Catalog parse error"));
    }
}
