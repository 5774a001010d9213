//! Unified error type for the offshore BOS model
//!
//! Every fallible operation in the workspace returns [`WobosResult`]. The only
//! errors the evaluation itself can raise are precondition violations on the
//! supplied configuration; those are reported as [`WobosError::Validation`]
//! carrying the path of the offending field so callers can point the user at
//! the exact input that was rejected.
//!
//! # Example
//!
//! ```
//! use wobos_core::{WobosError, WobosResult};
//!
//! fn check_rating(rating_mw: f64) -> WobosResult<()> {
//!     if rating_mw <= 0.0 {
//!         return Err(WobosError::validation("turbine.rating_mw", "must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rating(-1.0).is_err());
//! ```

use thiserror::Error;

/// Unified error type for configuration loading and model evaluation.
#[derive(Error, Debug)]
pub enum WobosError {
    /// I/O errors (reading configuration files, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// A configuration field failed a precondition check
    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration errors not tied to a single field
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WobosError {
    /// Build a validation error for `field`.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WobosError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field path, if this is a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            WobosError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using WobosError.
pub type WobosResult<T> = Result<T, WobosError>;

impl From<serde_json::Error> for WobosError {
    fn from(err: serde_json::Error) -> Self {
        WobosError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for WobosError {
    fn from(err: toml::de::Error) -> Self {
        WobosError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_field() {
        let err = WobosError::validation("site.water_depth_m", "must be positive");
        let text = err.to_string();
        assert!(text.contains("Validation error"));
        assert!(text.contains("site.water_depth_m"));
        assert_eq!(err.field(), Some("site.water_depth_m"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WobosError = io_err.into();
        assert!(matches!(err, WobosError::Io(_)));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_toml_error_is_parse() {
        let bad: Result<toml::Value, _> = toml::from_str("rating = ");
        let err: WobosError = bad.unwrap_err().into();
        assert!(matches!(err, WobosError::Parse(_)));
    }
}
