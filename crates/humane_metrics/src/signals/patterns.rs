//! Pattern Library - named, ordered pattern sets shared by the metrics
//!
//! Every set is compiled once on first use and is read-only afterwards. Matching
//! always runs against text produced by [`normalize_text`], so patterns are
//! written in lowercase with ASCII punctuation.

use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Text Normalization
// ============================================================================

/// Lowercase `text` and fold typographic quotes and dashes to ASCII
pub fn normalize_text(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'") // U+2019/U+2018 SINGLE QUOTATION MARKs
        .replace(['\u{201C}', '\u{201D}'], "\"") // U+201C/U+201D DOUBLE QUOTATION MARKs
        .replace(['\u{2013}', '\u{2014}'], "-") // U+2013/U+2014 EN/EM DASHes
        .to_lowercase()
}

// ============================================================================
// Pattern Set
// ============================================================================

/// Named, ordered set of compiled patterns.
///
/// A text matches the set when any pattern matches; order only matters to
/// callers asking *which* pattern (or which span) matched first.
#[derive(Debug)]
pub struct PatternSet {
    name: &'static str,
    sources: Vec<&'static str>,
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Build a set from regular expressions
    pub(crate) fn from_regexes(name: &'static str, sources: &[&'static str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source).expect("built-in pattern must compile"))
            .collect();
        Self {
            name,
            sources: sources.to_vec(),
            patterns,
        }
    }

    /// Build a set from literal phrases matched as plain substrings
    pub(crate) fn from_phrases(name: &'static str, phrases: &[&'static str]) -> Self {
        let patterns = phrases
            .iter()
            .map(|phrase| Regex::new(&regex::escape(phrase)).expect("escaped phrase must compile"))
            .collect();
        Self {
            name,
            sources: phrases.to_vec(),
            patterns,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches the already-normalized `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }

    /// Source of the first pattern (in set order) that matches `text`
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .zip(&self.sources)
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, source)| *source)
    }

    /// Index of the first span the set matches, scanning spans in order
    pub fn first_matching_span<'a, I>(&self, spans: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        spans.into_iter().position(|span| self.is_match(span))
    }
}

// ============================================================================
// Pre-compiled Pattern Sets (initialized once on first use)
// ============================================================================

/// Agent language proposing an alternative perspective or course of action
pub static REFRAME_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_regexes(
        "reframe",
        &[
            r"another way to (see|think|look)",
            r"what if",
            r"you (might|could|should) (try|consider)",
            r"have you (tried|thought about|considered)",
            r"it (helps|might help) to",
            r"one (thing|way|approach)",
        ],
    )
});

/// Agent language acknowledging the user's stated emotion
pub static VALIDATION_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_regexes(
        "validation",
        &[
            r"(that|it) (sounds|seems|feels) (like|really|so)",
            r"i (hear|understand|see) (that|you)",
            r"that makes sense",
            r"(it's|that's) (understandable|valid|reasonable)",
            r"anyone (in your situation )?would feel",
            r"i can (understand|imagine|see)",
        ],
    )
});

/// User resistance to a prior suggestion
pub static RESISTANCE_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_regexes(
        "resistance",
        &[
            // Contrast conjunctions
            r"\b(but|however|though)\b",
            // Inability and rejection
            r"\bi can't\b",
            r"\bthat (won't|doesn't|wouldn't) work\b",
            r"\byou don't understand\b",
            // Dismissing the difficulty
            r"\beasi(er|ly) said than done\b",
            r"\bnot that simple\b",
            r"\bwish it were that easy\b",
            // Already attempted
            r"\bi've tried that\b",
            r"\bthat doesn't help\b",
            r"\bi already (tried|know)\b",
        ],
    )
});

/// User-generated insight or action planning
pub static SOLUTION_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_regexes(
        "solution",
        &[
            // Intentions
            r"\bi think i'?ll\b",
            r"\bmaybe i (could|can|should)\b",
            r"\bi'?m going to\b",
            r"\bi might try\b",
            // Realizations
            r"\bi realize\b",
            r"\bi see now\b",
            r"\bit makes sense to\b",
            // Plans
            r"\bmy plan is\b",
            r"\bi'?ll start by\b",
            r"\bwhat if i\b",
            r"\bi could probably\b",
            r"\bi need to\b",
            r"\bi should\b",
        ],
    )
});

/// Wh-words, modal openers and "do you" marking a sentence as a question
pub static QUESTION_CUE_PATTERNS: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_regexes(
        "question_cue",
        &[r"\b(what|how|why|when|where|who|which|could|would|do you)\b"],
    )
});

/// Dismissive cheerfulness; matched as substrings
pub static TOXIC_POSITIVITY_PHRASES: LazyLock<PatternSet> = LazyLock::new(|| {
    PatternSet::from_phrases(
        "toxic_positivity",
        &[
            "i'm fine",
            "everything's great",
            "just stay positive",
            "it's all good",
            "no worries",
            "it could be worse",
            "at least",
            "just gotta",
        ],
    )
});

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_text_folds_unicode_punctuation() {
        assert_eq!(
            normalize_text("I Can\u{2019}t \u{201C}Do\u{201D} It \u{2014} Really"),
            "i can't \"do\" it - really"
        );
    }

    #[test]
    fn test_reframe_patterns() {
        assert!(REFRAME_PATTERNS.is_match("have you tried journaling?"));
        assert!(REFRAME_PATTERNS.is_match("you might consider a walk"));
        assert!(REFRAME_PATTERNS.is_match("there is another way to look at it"));
        assert!(!REFRAME_PATTERNS.is_match("that sounds exhausting"));
    }

    #[test]
    fn test_validation_patterns() {
        assert!(VALIDATION_PATTERNS.is_match("that sounds really hard"));
        assert!(VALIDATION_PATTERNS.is_match("anyone would feel that way"));
        assert!(VALIDATION_PATTERNS.is_match("anyone in your situation would feel that way"));
        assert!(VALIDATION_PATTERNS.is_match("it's understandable"));
        assert!(!VALIDATION_PATTERNS.is_match("have you tried journaling?"));
    }

    #[test]
    fn test_resistance_patterns_respect_word_boundaries() {
        assert!(RESISTANCE_PATTERNS.is_match("yeah, but i have no time"));
        assert!(RESISTANCE_PATTERNS.is_match("that won't work for me"));
        assert!(RESISTANCE_PATTERNS.is_match(&normalize_text("I can\u{2019}t do that")));
        // "butter" and "thought" must not trip the contrast conjunctions
        assert!(!RESISTANCE_PATTERNS.is_match("i thought about butter"));
    }

    #[test]
    fn test_solution_patterns() {
        assert!(SOLUTION_PATTERNS.is_match("i think ill call her"));
        assert!(SOLUTION_PATTERNS.is_match("i think i'll call her"));
        assert!(SOLUTION_PATTERNS.is_match("maybe i could ask for help"));
        assert!(SOLUTION_PATTERNS.is_match("im going to rest"));
        assert!(!SOLUTION_PATTERNS.is_match("you should rest"));
    }

    #[test]
    fn test_question_cues() {
        assert!(QUESTION_CUE_PATTERNS.is_match("how are you feeling today"));
        assert!(QUESTION_CUE_PATTERNS.is_match("do you want to talk"));
        assert!(!QUESTION_CUE_PATTERNS.is_match("i think that's progress"));
        assert!(!QUESTION_CUE_PATTERNS.is_match("somehow it worked"));
    }

    #[test]
    fn test_toxic_positivity_is_substring_match() {
        assert!(TOXIC_POSITIVITY_PHRASES.is_match("honestly it's all good now"));
        assert!(TOXIC_POSITIVITY_PHRASES.is_match("at least i tried"));
        assert!(!TOXIC_POSITIVITY_PHRASES.is_match("i'm frustrated"));
    }

    #[test]
    fn test_first_match_follows_set_order() {
        assert_eq!(
            RESISTANCE_PATTERNS.first_match("but that won't work"),
            Some(r"\b(but|however|though)\b")
        );
        assert_eq!(RESISTANCE_PATTERNS.first_match("sounds great"), None);
    }

    #[test]
    fn test_first_matching_span() {
        let spans = ["i feel lost", " that sounds really hard", " have you tried resting"];
        assert_eq!(VALIDATION_PATTERNS.first_matching_span(spans), Some(1));
        assert_eq!(REFRAME_PATTERNS.first_matching_span(spans), Some(2));
        assert_eq!(SOLUTION_PATTERNS.first_matching_span(spans), None);
    }

    #[test]
    fn test_sets_are_named_and_non_empty() {
        for set in [
            &*REFRAME_PATTERNS,
            &*VALIDATION_PATTERNS,
            &*RESISTANCE_PATTERNS,
            &*SOLUTION_PATTERNS,
            &*QUESTION_CUE_PATTERNS,
            &*TOXIC_POSITIVITY_PHRASES,
        ] {
            assert!(!set.is_empty(), "{} should not be empty", set.name());
        }
        assert_eq!(RESISTANCE_PATTERNS.len(), 10);
    }
}
