//! Error types
//!
//! Evaluation never fails: malformed calls degrade to `Value::Null`. These
//! errors only cover the fallible edges of the crate (configuration loading
//! and JSON interop).

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, JxError>;

/// Error raised outside of evaluation
#[derive(Debug, Error)]
pub enum JxError {
    /// Configuration text could not be parsed
    #[error("Config error: {message}")]
    Config { message: String },

    /// JSON text could not be parsed, or a value has no JSON form
    #[error("JSON error: {message}")]
    Json { message: String },
}

impl JxError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Config { message } => message,
            Self::Json { message } => message,
        }
    }
}

impl From<toml::de::Error> for JxError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<serde_json::Error> for JxError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = JxError::config("bad key");
        assert_eq!(err.to_string(), "Config error: bad key");
        assert_eq!(err.message(), "bad key");
    }

    #[test]
    fn test_json_error_display() {
        let err = JxError::json("symbol has no JSON form");
        assert_eq!(err.to_string(), "JSON error: symbol has no JSON form");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: JxError = parse_err.into();
        assert!(matches!(err, JxError::Json { .. }));
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_error_is_std_error() {
        let err = JxError::config("x");
        let std_err: &dyn std::error::Error = &err;
        assert!(std_err.source().is_none());
    }
}
