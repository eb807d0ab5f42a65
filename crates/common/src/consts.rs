pub const DEFAULT_CONFIG_PATH: &str = "./humane_metrics.yaml";
pub const CONFIG_PATH_ENV: &str = "HUMANE_METRICS_CONFIG";

/// Number of trailing user messages considered by the authenticity scorer
pub const DEFAULT_RECENCY_WINDOW: usize = 5;
/// User message count at which zero self-generated solutions flags scaffolding
pub const DEFAULT_SCAFFOLDING_MIN_MESSAGES: usize = 10;
pub const DEFAULT_PUSHBACK_SNIPPET_CHARS: usize = 100;
pub const DEFAULT_PUSHBACK_MAX_EXAMPLES: usize = 3;
pub const DEFAULT_SOLUTION_SNIPPET_CHARS: usize = 150;
/// Longest text (in characters) the built-in sentiment analyzer accepts
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
