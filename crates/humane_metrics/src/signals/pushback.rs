//! User Pushback - how often the user resists the agent's suggestions

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{normalize_text, RESISTANCE_PATTERNS};
use super::{round_to, truncate_chars};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPushback {
    /// Percentage of user messages containing resistance, in [0, 100]
    pub frequency: f64,
    pub count: usize,
    pub total: usize,
    /// Leading characters of the first few resisting messages, in order
    pub pushback_messages: Vec<String>,
    pub reasoning: String,
}

pub fn detect_user_pushback(
    user_messages: &[&str],
    snippet_chars: usize,
    max_examples: usize,
) -> UserPushback {
    let total = user_messages.len();
    let mut count = 0;
    let mut pushback_messages = Vec::new();

    for message in user_messages {
        let normalized = normalize_text(message);
        let Some(pattern) = RESISTANCE_PATTERNS.first_match(&normalized) else {
            continue;
        };

        count += 1;
        debug!(pattern, "user pushback detected");
        if pushback_messages.len() < max_examples {
            pushback_messages.push(truncate_chars(message, snippet_chars));
        }
    }

    let frequency = if total == 0 {
        0.0
    } else {
        round_to(100.0 * count as f64 / total as f64, 1)
    };

    UserPushback {
        frequency,
        count,
        total,
        pushback_messages,
        reasoning: format!("{} pushback instances in {} messages", count, total),
    }
}
