//! Configuration errors.

use thiserror::Error;

/// Fatal configuration errors.
///
/// Payloads are plain strings so a failed resolution can be cached and
/// handed out again on every later request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid section \"{section}\": expected a JSON object")]
    InvalidSection { section: String },

    #[error("Invalid value for \"{key}\": expected {expected}")]
    InvalidType { key: String, expected: &'static str },

    #[error("Invalid rule pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{message}")]
    RetiredKey { key: String, message: String },
}

impl ConfigError {
    pub(crate) fn retired(key: &str, replacement: &str) -> Self {
        ConfigError::RetiredKey {
            key: key.to_string(),
            message: format!(
                "The \"{key}\" option is not supported any more. Add a \"development\" profile \
                 and set {replacement} there. See the \"profiles\" section documentation for details"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retired_key_message_points_to_profiles() {
        let err = ConfigError::retired("developmentHashing", "{\"hashing\": \"never\"}");
        let text = err.to_string();
        assert!(text.contains("developmentHashing"));
        assert!(text.contains("\"development\" profile"));
        assert!(text.contains("{\"hashing\": \"never\"}"));
    }

    #[test]
    fn test_invalid_type_display() {
        let err = ConfigError::InvalidType {
            key: "chain".to_string(),
            expected: "a string",
        };
        assert_eq!(err.to_string(), "Invalid value for \"chain\": expected a string");
    }
}
