//! Validation Compliance - does the agent validate feelings before reframing?
//!
//! Two phases: whole-response presence checks for reframe and validation
//! language, then an ordering check over `.`-delimited spans. The span split is
//! coarse; when it cannot locate both cues the checker falls back
//! to the whole-response verdict.

use common::transcript::{Message, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{normalize_text, PatternSet, REFRAME_PATTERNS, VALIDATION_PATTERNS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCompliance {
    pub compliant: bool,
    pub has_reframe: bool,
    pub has_validation: bool,
    /// Known only when the span scan located both cues
    pub validation_first: Option<bool>,
    pub reasoning: String,
}

/// Check a single agent response; `user_message` is informational only.
pub fn check_validation_compliance(user_message: &str, agent_response: &str) -> ValidationCompliance {
    debug!(
        user_message_chars = user_message.chars().count(),
        agent_response_chars = agent_response.chars().count(),
        "checking validation compliance"
    );
    check_with_sets(agent_response, &REFRAME_PATTERNS, &VALIDATION_PATTERNS)
}

fn check_with_sets(
    agent_response: &str,
    reframes: &PatternSet,
    validations: &PatternSet,
) -> ValidationCompliance {
    let text = normalize_text(agent_response);

    if !reframes.is_match(&text) {
        return ValidationCompliance {
            compliant: true,
            has_reframe: false,
            has_validation: false,
            validation_first: None,
            reasoning: "No reframe detected - no validation needed".to_string(),
        };
    }

    if !validations.is_match(&text) {
        return ValidationCompliance {
            compliant: false,
            has_reframe: true,
            has_validation: false,
            validation_first: None,
            reasoning: "Reframe detected without emotional validation".to_string(),
        };
    }

    // Only '.' separates spans here; '!' and '?' stay inside their span
    let spans: Vec<&str> = text.split('.').collect();
    let validation_index = validations.first_matching_span(spans.iter().copied());
    let reframe_index = reframes.first_matching_span(spans.iter().copied());

    match (validation_index, reframe_index) {
        (Some(validation), Some(reframe)) => {
            let validation_first = validation < reframe;
            ValidationCompliance {
                compliant: validation_first,
                has_reframe: true,
                has_validation: true,
                validation_first: Some(validation_first),
                reasoning: if validation_first {
                    "Validation before reframe"
                } else {
                    "Reframe before validation"
                }
                .to_string(),
            }
        }
        _ => ValidationCompliance {
            compliant: true,
            has_reframe: true,
            has_validation: true,
            validation_first: None,
            reasoning: "Validation and reframe both present".to_string(),
        },
    }
}

// ============================================================================
// Exchange Sweep
// ============================================================================

/// Compliance verdict for one user -> agent exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeValidation {
    /// Position of the agent message in the transcript
    pub message_index: usize,
    #[serde(flatten)]
    pub result: ValidationCompliance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSweep {
    pub exchanges_checked: usize,
    pub reframes: usize,
    pub compliant_reframes: usize,
    /// Percentage of reframes preceded by validation; 100 when nothing was reframed
    pub rate: u32,
    pub results: Vec<ExchangeValidation>,
}

/// Run the checker on every agent message that directly answers a user message
pub fn sweep_exchanges(messages: &[Message]) -> ValidationSweep {
    let results: Vec<ExchangeValidation> = messages
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].role == Role::User && pair[1].role == Role::Agent)
        .map(|(i, pair)| ExchangeValidation {
            message_index: i + 1,
            result: check_validation_compliance(&pair[0].text, &pair[1].text),
        })
        .collect();

    let reframes = results.iter().filter(|r| r.result.has_reframe).count();
    let compliant_reframes = results
        .iter()
        .filter(|r| r.result.has_reframe && r.result.compliant)
        .count();

    let rate = if reframes == 0 {
        100
    } else {
        (100.0 * compliant_reframes as f64 / reframes as f64).round() as u32
    };

    ValidationSweep {
        exchanges_checked: results.len(),
        reframes,
        compliant_reframes,
        rate,
        results,
    }
}

// ============================================================================
// Tests
// ============================================================================
