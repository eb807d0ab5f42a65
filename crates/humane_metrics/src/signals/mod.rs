pub mod analyzer;
pub mod authenticity;
pub mod lexicon;
pub mod patterns;
pub mod pushback;
pub mod question_ratio;
pub mod sentiment;
pub mod solutions;
pub mod validation;

#[cfg(test)]
mod integration_tests;

pub use analyzer::{ConversationAnalyzer, HumaneMetricsAnalyzer, MetricsReport};
pub use sentiment::{LexiconSentimentAnalyzer, SentimentAnalyzer, SentimentScores};

/// Round to `places` decimals, ties to even (6.25 -> 6.2)
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// First `max_chars` characters of `text`, never splitting a code point
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
