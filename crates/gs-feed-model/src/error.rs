//! Feed model error types.

use thiserror::Error;

/// Errors raised while reading or loading the feed model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// A queried id does not exist in the current snapshot.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// A value outside a closed enumeration.
    #[error("unrecognized {kind} value: {value}")]
    UnrecognizedValue { kind: &'static str, value: String },

    /// A record that parsed but violates a schema invariant.
    #[error("invalid {kind} '{id}': {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl FeedError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid(kind: &'static str, id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias for feed model results.
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = FeedError::not_found("vehicle", "ev-404");
        assert_eq!(err.to_string(), "vehicle 'ev-404' not found");
    }

    #[test]
    fn invalid_record_message() {
        let err = FeedError::invalid("junction", "j1", "congestion 120 exceeds 100");
        assert!(err.to_string().contains("j1"));
        assert!(err.to_string().contains("exceeds 100"));
    }
}
