//! Sentiment Authenticity - genuine emotional expression vs. performative positivity
//!
//! Scores the most recent user messages from a base of 50 by adding five
//! independently-bounded contributions: polarity variation, emotional
//! intensity, subjectivity, a performative-positivity penalty and a bonus for
//! vulnerable negative affect. Only the final sum is clamped to [0, 100].

use common::errors::MetricsError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::patterns::{normalize_text, TOXIC_POSITIVITY_PHRASES};
use super::sentiment::SentimentAnalyzer;
use super::round_to;

const BASE_SCORE: i32 = 50;
const LOW_AUTHENTICITY_BELOW: i32 = 40;
const HIGH_AUTHENTICITY_ABOVE: i32 = 70;

// ============================================================================
// Threshold Tables
// ============================================================================

/// `(exclusive lower bound, contribution)`, evaluated top-down; first match wins
type Tier = (f64, i32);

const VARIATION_TIERS: &[Tier] = &[(0.6, 25), (0.3, 15), (0.1, 8)];
const FLAT_VARIATION: i32 = -10;

const INTENSITY_TIERS: &[Tier] = &[(0.5, 25), (0.3, 15), (0.1, 5)];
const FLAT_INTENSITY: i32 = -15;

const SUBJECTIVITY_TIERS: &[Tier] = &[(0.5, 20), (0.3, 10)];
const DETACHED_SUBJECTIVITY: i32 = -5;

const POSITIVE_BUT_FLAT_PENALTY: i32 = -30;
const POSITIVE_BUT_IMPERSONAL_PENALTY: i32 = -25;
const TOXIC_POSITIVITY_PENALTY: i32 = -15;
/// A toxic phrase leaves the penalty at -30 or below
const TOXIC_POSITIVITY_CEILING: i32 = -30;

const VULNERABILITY_BONUS: i32 = 10;

fn tier_contribution(value: f64, tiers: &[Tier], otherwise: i32) -> i32 {
    tiers
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, contribution)| *contribution)
        .unwrap_or(otherwise)
}

// ============================================================================
// Result Types
// ============================================================================

/// Signed contribution of each signal to the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthenticityDetails {
    pub sentiment_variation: i32,
    pub emotional_intensity: i32,
    pub subjectivity: i32,
    pub performative_positivity_penalty: i32,
    pub authenticity_bonus: i32,
}

impl AuthenticityDetails {
    pub fn total(&self) -> i32 {
        self.sentiment_variation
            + self.emotional_intensity
            + self.subjectivity
            + self.performative_positivity_penalty
            + self.authenticity_bonus
    }
}

/// Window averages, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub avg_sentiment: f64,
    pub avg_intensity: f64,
    pub avg_subjectivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAuthenticity {
    /// Authenticity score in [0, 100]
    pub score: u32,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<AuthenticityDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<SentimentAnalysis>,
}

// ============================================================================
// Scorer
// ============================================================================

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Score the last `recency_window` entries of `user_messages`.
///
/// Fails with [`MetricsError::Sentiment`] if the analyzer rejects any text in
/// the window; no default score is substituted.
pub fn score_sentiment_authenticity(
    user_messages: &[&str],
    sentiment: &dyn SentimentAnalyzer,
    recency_window: usize,
) -> Result<SentimentAuthenticity, MetricsError> {
    if user_messages.is_empty() {
        return Ok(SentimentAuthenticity {
            score: BASE_SCORE as u32,
            reasoning: "No messages to analyze".to_string(),
            details: None,
            analysis: None,
        });
    }

    // a zero window would leave nothing to average
    let offset = user_messages.len().saturating_sub(recency_window.max(1));
    let window = &user_messages[offset..];

    let mut polarities = Vec::with_capacity(window.len());
    let mut intensities = Vec::with_capacity(window.len());
    let mut subjectivities = Vec::with_capacity(window.len());

    for (i, text) in window.iter().enumerate() {
        let scores = sentiment.analyze(text).map_err(|source| {
            warn!(message_index = offset + i, error = %source, "sentiment analysis failed");
            MetricsError::Sentiment {
                message_index: offset + i,
                source,
            }
        })?;
        polarities.push(scores.polarity);
        intensities.push(scores.compound.abs());
        subjectivities.push(scores.subjectivity);
    }

    let avg_polarity = mean(&polarities);
    let avg_intensity = mean(&intensities);
    let avg_subjectivity = mean(&subjectivities);

    let mut details = AuthenticityDetails::default();

    // 1. Variation needs at least two messages; a single message stays neutral
    if polarities.len() > 1 {
        let max = polarities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = polarities.iter().copied().fold(f64::INFINITY, f64::min);
        details.sentiment_variation = tier_contribution(max - min, VARIATION_TIERS, FLAT_VARIATION);
    }

    // 2. Intensity
    details.emotional_intensity = tier_contribution(avg_intensity, INTENSITY_TIERS, FLAT_INTENSITY);

    // 3. Subjectivity
    details.subjectivity =
        tier_contribution(avg_subjectivity, SUBJECTIVITY_TIERS, DETACHED_SUBJECTIVITY);

    // 4. Performative positivity
    if avg_polarity > 0.3 && avg_intensity < 0.3 {
        details.performative_positivity_penalty = POSITIVE_BUT_FLAT_PENALTY;
    } else if avg_polarity > 0.5 && avg_subjectivity < 0.3 {
        details.performative_positivity_penalty = POSITIVE_BUT_IMPERSONAL_PENALTY;
    }

    let has_toxic_positivity = window
        .iter()
        .any(|text| TOXIC_POSITIVITY_PHRASES.is_match(&normalize_text(text)));
    if has_toxic_positivity {
        details.performative_positivity_penalty = (details.performative_positivity_penalty
            + TOXIC_POSITIVITY_PENALTY)
            .min(TOXIC_POSITIVITY_CEILING);
    }

    // 5. Vulnerable negative affect
    if avg_polarity < -0.1 && avg_intensity > 0.4 {
        details.authenticity_bonus = VULNERABILITY_BONUS;
    }

    let score = (BASE_SCORE + details.total()).clamp(0, 100);

    let tier = if score < LOW_AUTHENTICITY_BELOW {
        "Low authenticity - flat affect or performative positivity detected."
    } else if score > HIGH_AUTHENTICITY_ABOVE {
        "High authenticity - genuine emotional range and intensity."
    } else {
        "Moderate authenticity - some emotional expression."
    };

    debug!(
        window = window.len(),
        score,
        toxic_positivity = has_toxic_positivity,
        "scored sentiment authenticity"
    );

    Ok(SentimentAuthenticity {
        score: score as u32,
        reasoning: format!("Analyzed {} messages. {}", window.len(), tier),
        details: Some(details),
        analysis: Some(SentimentAnalysis {
            avg_sentiment: round_to(avg_polarity, 2),
            avg_intensity: round_to(avg_intensity, 2),
            avg_subjectivity: round_to(avg_subjectivity, 2),
        }),
    })
}

// ============================================================================
// Tests
// ============================================================================
