//! Error types for the mapchain core library
//!
//! Only configuration documents can fail. Mapper transforms are total and
//! unknown mapper ids are skipped, so neither shows up here.

use thiserror::Error;

/// Main error type for mapchain operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but not a chain configuration
    #[error("Malformed chain configuration: {message}")]
    MalformedConfig {
        message: String,
        field: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(message: impl Into<String>, field: &str) -> Self {
        Error::MalformedConfig {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedConfig {
            message: "mappers must be an array".to_string(),
            field: Some("mappers".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Malformed chain configuration: mappers must be an array"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_malformed_helper_records_field() {
        match Error::malformed("missing", "name") {
            Error::MalformedConfig { field, .. } => assert_eq!(field.as_deref(), Some("name")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
