//! Sentiment Capability - polarity, subjectivity and compound intensity per text
//!
//! The scorers only see the [`SentimentAnalyzer`] trait, so any lexicon or model
//! can back them. [`LexiconSentimentAnalyzer`] is the built-in implementation: a
//! rule-based word lexicon with negation, degree modifiers, capitalization and
//! exclamation emphasis.

use common::consts::DEFAULT_MAX_TEXT_LENGTH;
use common::errors::SentimentError;
use serde::{Deserialize, Serialize};

use super::lexicon::{lookup, BOOSTERS, DAMPENERS, NEGATORS};

// ============================================================================
// Capability Interface
// ============================================================================

/// Sentiment of a single text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Signed valence in [-1, 1]
    pub polarity: f64,
    /// Opinion vs. fact in [0, 1]
    pub subjectivity: f64,
    /// Signed overall strength in [-1, 1]
    pub compound: f64,
}

/// Deterministic text-to-sentiment function used by the scorers
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<SentimentScores, SentimentError>;
}

// ============================================================================
// Lexicon Analyzer
// ============================================================================

const NEGATION_WINDOW: usize = 3;
const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;
const BEFORE_BUT_WEIGHT: f64 = 0.5;
const AFTER_BUT_WEIGHT: f64 = 1.5;

const POLARITY_NEGATION: f64 = -0.5;
const POLARITY_BOOST: f64 = 1.3;
const POLARITY_DAMPEN: f64 = 0.5;

#[derive(Debug)]
struct Token {
    word: String,
    shouting: bool,
}

impl Token {
    fn is_negator(&self) -> bool {
        NEGATORS.contains(&self.word.as_str()) || self.word.ends_with("n't")
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let folded = raw.replace(['\u{2019}', '\u{2018}'], "'");
            let trimmed = folded.trim_matches(|c: char| c.is_ascii_punctuation());
            if trimmed.is_empty() {
                return None;
            }

            let letters: Vec<char> = trimmed.chars().filter(|c| c.is_alphabetic()).collect();
            let shouting = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());

            Some(Token {
                word: trimmed.to_lowercase(),
                shouting,
            })
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Rule-based analyzer over the built-in word lexicon
#[derive(Debug, Clone)]
pub struct LexiconSentimentAnalyzer {
    max_text_length: usize,
}

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self::with_max_text_length(DEFAULT_MAX_TEXT_LENGTH)
    }

    /// Texts longer than `max_text_length` characters are rejected
    pub fn with_max_text_length(max_text_length: usize) -> Self {
        Self { max_text_length }
    }
}

impl Default for LexiconSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentScores, SentimentError> {
        let char_count = text.chars().count();
        if char_count > self.max_text_length {
            return Err(SentimentError::UnsupportedInput {
                reason: format!(
                    "text has {} characters, limit is {}",
                    char_count, self.max_text_length
                ),
            });
        }

        let tokens = tokenize(text);
        let mixed_case =
            tokens.iter().any(|t| t.shouting) && tokens.iter().any(|t| !t.shouting);
        let but_index = tokens.iter().position(|t| t.word == "but");

        let mut valences = Vec::new();
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some((base_valence, base_subjectivity)) = lookup(&token.word) else {
                continue;
            };

            let direction = base_valence.signum();
            let mut valence = base_valence;
            let mut polarity = base_valence / 4.0;
            let mut subjectivity = base_subjectivity;

            if let Some(previous) = i.checked_sub(1).map(|j| tokens[j].word.as_str()) {
                if BOOSTERS.contains(&previous) {
                    valence += direction * BOOSTER_INCREMENT;
                    polarity *= POLARITY_BOOST;
                    subjectivity *= POLARITY_BOOST;
                } else if DAMPENERS.contains(&previous) {
                    valence -= direction * BOOSTER_INCREMENT;
                    polarity *= POLARITY_DAMPEN;
                    subjectivity *= POLARITY_DAMPEN;
                }
            }

            if token.shouting && mixed_case {
                valence += direction * CAPS_INCREMENT;
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(Token::is_negator) {
                valence *= NEGATION_SCALAR;
                polarity *= POLARITY_NEGATION;
            }

            if let Some(but) = but_index {
                if i < but {
                    valence *= BEFORE_BUT_WEIGHT;
                } else if i > but {
                    valence *= AFTER_BUT_WEIGHT;
                }
            }

            valences.push(valence);
            polarities.push(polarity.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity.min(1.0));
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
            sum += sum.signum() * exclamations as f64 * EXCLAMATION_INCREMENT;
        }

        let compound = if sum == 0.0 {
            0.0
        } else {
            (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
        };

        Ok(SentimentScores {
            polarity: mean(&polarities).clamp(-1.0, 1.0),
            subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
            compound,
        })
    }
}

// ============================================================================
// Test Doubles
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Table-driven analyzer; unknown texts are neutral
    #[derive(Debug, Default)]
    pub struct StubSentiment {
        scores: HashMap<String, SentimentScores>,
    }

    impl StubSentiment {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, text: &str, polarity: f64, compound: f64, subjectivity: f64) -> Self {
            self.scores.insert(
                text.to_string(),
                SentimentScores {
                    polarity,
                    subjectivity,
                    compound,
                },
            );
            self
        }
    }

    impl SentimentAnalyzer for StubSentiment {
        fn analyze(&self, text: &str) -> Result<SentimentScores, SentimentError> {
            Ok(self.scores.get(text).copied().unwrap_or_default())
        }
    }

    /// Fails for any text containing `trigger`
    #[derive(Debug)]
    pub struct FailingSentiment {
        pub trigger: &'static str,
    }

    impl SentimentAnalyzer for FailingSentiment {
        fn analyze(&self, text: &str) -> Result<SentimentScores, SentimentError> {
            if text.contains(self.trigger) {
                Err(SentimentError::Unavailable("backend offline".to_string()))
            } else {
                Ok(SentimentScores::default())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn analyze(text: &str) -> SentimentScores {
        LexiconSentimentAnalyzer::new().analyze(text).unwrap()
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        assert_eq!(
            analyze("The meeting is at noon."),
            SentimentScores::default()
        );
        assert_eq!(analyze(""), SentimentScores::default());
    }

    #[test]
    fn test_positive_text() {
        let scores = analyze("I am happy");
        assert!(scores.polarity > 0.6);
        assert!(scores.compound > 0.5);
        assert_eq!(scores.subjectivity, 1.0);
    }

    #[test]
    fn test_booster_intensifies() {
        let plain = analyze("I am happy");
        let boosted = analyze("I am so happy");
        assert!(boosted.compound > plain.compound);
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn test_dampener_softens() {
        let plain = analyze("I am worried");
        let softened = analyze("I am slightly worried");
        assert!(softened.compound > plain.compound);
        assert!(softened.compound < 0.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scores = analyze("I am not happy");
        assert!(scores.polarity < 0.0);
        assert!(scores.compound < 0.0);

        let contracted = analyze("I don\u{2019}t feel good");
        assert!(contracted.compound < 0.0);
    }

    #[test]
    fn test_contrastive_but_favors_later_clause() {
        let scores = analyze("I was happy but now I am sad");
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_caps_and_exclamations_add_emphasis() {
        let plain = analyze("this is great");
        let shouted = analyze("this is GREAT");
        let exclaimed = analyze("this is great!!!");
        assert!(shouted.compound > plain.compound);
        assert!(exclaimed.compound > plain.compound);
        // emphasis does not change polarity
        assert_eq!(exclaimed.polarity, plain.polarity);
    }

    #[test]
    fn test_compound_is_bounded() {
        let scores = analyze("AMAZING wonderful fantastic perfect awesome love joy!!!!!!");
        assert!(scores.compound <= 1.0);
        assert!(scores.compound > 0.9);
        assert!(scores.polarity <= 1.0);
    }

    #[test]
    fn test_overlong_text_is_unsupported() {
        let analyzer = LexiconSentimentAnalyzer::with_max_text_length(10);
        let err = analyzer.analyze("this text is far too long").unwrap_err();
        assert!(matches!(err, SentimentError::UnsupportedInput { .. }));
        assert!(analyzer.analyze("short").is_ok());
    }

    #[test]
    fn test_deterministic() {
        let text = "I'm honestly not sure, I feel stuck and tired but hopeful!";
        assert_eq!(analyze(text), analyze(text));
    }
}
