//! User Solutions - self-generated insight and plans from the user

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{normalize_text, SOLUTION_PATTERNS};
use super::truncate_chars;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSolutions {
    pub count: usize,
    pub solutions: Vec<String>,
    /// A long conversation in which the user never proposed anything
    pub needs_scaffolding: bool,
    pub reasoning: String,
}

pub fn detect_user_solutions(
    user_messages: &[&str],
    snippet_chars: usize,
    scaffolding_min_messages: usize,
) -> UserSolutions {
    if user_messages.is_empty() {
        return UserSolutions {
            count: 0,
            solutions: Vec::new(),
            needs_scaffolding: false,
            reasoning: "No messages to analyze".to_string(),
        };
    }

    let solutions: Vec<String> = user_messages
        .iter()
        .filter(|message| SOLUTION_PATTERNS.is_match(&normalize_text(message)))
        .map(|message| truncate_chars(message, snippet_chars))
        .collect();

    let count = solutions.len();
    let needs_scaffolding = user_messages.len() >= scaffolding_min_messages && count == 0;
    debug!(count, needs_scaffolding, "detected user solutions");

    UserSolutions {
        count,
        solutions,
        needs_scaffolding,
        reasoning: format!("Found {} user-generated solutions", count),
    }
}
