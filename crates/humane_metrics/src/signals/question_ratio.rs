//! Question Ratio - how Socratic the agent is, as questions per sentence

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use super::patterns::{normalize_text, QUESTION_CUE_PATTERNS};
use super::round_to;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern must compile"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRatio {
    /// Percentage of sentences that are questions, in [0, 100]
    pub ratio: f64,
    pub questions: usize,
    pub total_sentences: usize,
    pub reasoning: String,
}

/// Split on runs of `.`, `!` and `?`, dropping the terminators and any
/// whitespace-only pieces.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

// The split consumes every '?', so only cue words mark a question
fn is_question(sentence: &str) -> bool {
    QUESTION_CUE_PATTERNS.is_match(&normalize_text(sentence))
}

pub fn calculate_question_ratio(agent_messages: &[&str]) -> QuestionRatio {
    let mut questions = 0;
    let mut total_sentences = 0;

    for message in agent_messages {
        let sentences = split_sentences(message);
        total_sentences += sentences.len();
        questions += sentences.iter().filter(|s| is_question(s)).count();
    }

    if total_sentences == 0 {
        return QuestionRatio {
            ratio: 100.0,
            questions: 0,
            total_sentences: 0,
            reasoning: "No agent sentences to analyze".to_string(),
        };
    }

    let ratio = round_to(100.0 * questions as f64 / total_sentences as f64, 1);
    debug!(questions, total_sentences, ratio, "calculated question ratio");

    QuestionRatio {
        ratio,
        questions,
        total_sentences,
        reasoning: format!(
            "{} questions out of {} sentences",
            questions, total_sentences
        ),
    }
}
