use serde_json::{json, Value};
use thiserror::Error;

// -----------------------------------------------------------------------------
// Sentiment capability errors
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SentimentError {
    #[error("unsupported input: {reason}")]
    UnsupportedInput { reason: String },

    #[error("sentiment analyzer unavailable: {0}")]
    Unavailable(String),
}

// -----------------------------------------------------------------------------
// Scoring engine errors
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("sentiment analysis failed for message {message_index}: {source}")]
    Sentiment {
        /// Position of the failing text within the scored message sequence
        message_index: usize,
        #[source]
        source: SentimentError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration value for `{field}`: {why}")]
    Invalid { field: &'static str, why: String },
}

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read transcript `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed transcript: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Renders an error as the structured body the wrapper reports to callers:
/// `{"error": {"code", "message", "details"}}`.
pub trait ErrorReport: std::error::Error {
    fn code(&self) -> &'static str;

    fn details(&self) -> Value {
        json!({})
    }

    fn to_report(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "details": self.details()
            }
        })
    }
}

impl ErrorReport for MetricsError {
    fn code(&self) -> &'static str {
        match self {
            MetricsError::Sentiment { .. } => "CapabilityFailure",
        }
    }

    fn details(&self) -> Value {
        match self {
            MetricsError::Sentiment {
                message_index,
                source,
            } => json!({ "message_index": message_index, "reason": source.to_string() }),
        }
    }
}

impl ErrorReport for ConfigurationError {
    fn code(&self) -> &'static str {
        match self {
            ConfigurationError::Io { .. } => "ConfigurationUnreadable",
            ConfigurationError::Parse(_) => "ConfigurationMalformed",
            ConfigurationError::Invalid { .. } => "ConfigurationInvalid",
        }
    }

    fn details(&self) -> Value {
        match self {
            ConfigurationError::Io { path, .. } => json!({ "path": path }),
            ConfigurationError::Parse(_) => json!({}),
            ConfigurationError::Invalid { field, why } => json!({ "field": field, "reason": why }),
        }
    }
}

impl ErrorReport for TranscriptError {
    fn code(&self) -> &'static str {
        match self {
            TranscriptError::Io { .. } => "TranscriptUnreadable",
            TranscriptError::Parse(_) => "MalformedMessage",
        }
    }

    fn details(&self) -> Value {
        match self {
            TranscriptError::Io { path, .. } => json!({ "path": path }),
            TranscriptError::Parse(err) => json!({ "line": err.line(), "column": err.column() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capability_failure_report() {
        let err = MetricsError::Sentiment {
            message_index: 2,
            source: SentimentError::UnsupportedInput {
                reason: "text exceeds 10 characters".to_string(),
            },
        };

        let body = err.to_report();
        assert_eq!(body["error"]["code"], "CapabilityFailure");
        assert_eq!(body["error"]["details"]["message_index"], 2);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("text exceeds 10 characters"));
    }

    #[test]
    fn test_sentiment_error_is_source() {
        use std::error::Error as _;

        let err = MetricsError::Sentiment {
            message_index: 0,
            source: SentimentError::Unavailable("lexicon not loaded".to_string()),
        };
        let source = err.source().expect("cause should be preserved");
        assert_eq!(
            source.to_string(),
            "sentiment analyzer unavailable: lexicon not loaded"
        );
    }

    #[test]
    fn test_malformed_transcript_report() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TranscriptError::from(parse_err);

        let body = err.to_report();
        assert_eq!(body["error"]["code"], "MalformedMessage");
        assert_eq!(body["error"]["details"]["line"], 1);
    }
}
