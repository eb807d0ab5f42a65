use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::consts::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_TEXT_LENGTH, DEFAULT_PUSHBACK_MAX_EXAMPLES,
    DEFAULT_PUSHBACK_SNIPPET_CHARS, DEFAULT_RECENCY_WINDOW, DEFAULT_SCAFFOLDING_MIN_MESSAGES,
    DEFAULT_SOLUTION_SNIPPET_CHARS,
};
use crate::errors::ConfigurationError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Configuration {
    pub version: Option<String>,
    pub metrics: Option<MetricsSettings>,
    pub sentiment: Option<SentimentSettings>,
    pub tracing: Option<Tracing>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetricsSettings {
    pub recency_window: Option<usize>,
    pub scaffolding_min_messages: Option<usize>,
    pub pushback_snippet_chars: Option<usize>,
    pub pushback_max_examples: Option<usize>,
    pub solution_snippet_chars: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SentimentSettings {
    pub max_text_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Tracing {
    pub log_level: Option<String>,
}

/// Fully-resolved scorer limits with every default applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringLimits {
    pub recency_window: usize,
    pub scaffolding_min_messages: usize,
    pub pushback_snippet_chars: usize,
    pub pushback_max_examples: usize,
    pub solution_snippet_chars: usize,
}

impl Default for ScoringLimits {
    fn default() -> Self {
        Self {
            recency_window: DEFAULT_RECENCY_WINDOW,
            scaffolding_min_messages: DEFAULT_SCAFFOLDING_MIN_MESSAGES,
            pushback_snippet_chars: DEFAULT_PUSHBACK_SNIPPET_CHARS,
            pushback_max_examples: DEFAULT_PUSHBACK_MAX_EXAMPLES,
            solution_snippet_chars: DEFAULT_SOLUTION_SNIPPET_CHARS,
        }
    }
}

impl Configuration {
    /// Loads the YAML file at `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigurationError> {
        let config: Configuration = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let window = self.metrics.as_ref().and_then(|m| m.recency_window);
        if window == Some(0) {
            return Err(ConfigurationError::Invalid {
                field: "metrics.recency_window",
                why: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn scoring_limits(&self) -> ScoringLimits {
        let defaults = ScoringLimits::default();
        let Some(metrics) = self.metrics.as_ref() else {
            return defaults;
        };

        ScoringLimits {
            recency_window: metrics.recency_window.unwrap_or(defaults.recency_window),
            scaffolding_min_messages: metrics
                .scaffolding_min_messages
                .unwrap_or(defaults.scaffolding_min_messages),
            pushback_snippet_chars: metrics
                .pushback_snippet_chars
                .unwrap_or(defaults.pushback_snippet_chars),
            pushback_max_examples: metrics
                .pushback_max_examples
                .unwrap_or(defaults.pushback_max_examples),
            solution_snippet_chars: metrics
                .solution_snippet_chars
                .unwrap_or(defaults.solution_snippet_chars),
        }
    }

    pub fn max_text_length(&self) -> usize {
        self.sentiment
            .as_ref()
            .and_then(|s| s.max_text_length)
            .unwrap_or(DEFAULT_MAX_TEXT_LENGTH)
    }

    pub fn log_level(&self) -> &str {
        self.tracing
            .as_ref()
            .and_then(|t| t.log_level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
