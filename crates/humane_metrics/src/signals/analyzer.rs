//! Humane Metrics - transcript-level scoring of therapeutic conversation quality
//!
//! The analyzer partitions a transcript by role and fans the user and agent
//! texts out to the individual scorers. Validation compliance is judged per
//! exchange and is exposed separately from the bulk report.

use common::configuration::ScoringLimits;
use common::errors::MetricsError;
use common::transcript::{texts_for_role, Message, Role};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use super::authenticity::{score_sentiment_authenticity, SentimentAuthenticity};
use super::pushback::{detect_user_pushback, UserPushback};
use super::question_ratio::{calculate_question_ratio, QuestionRatio};
use super::sentiment::{LexiconSentimentAnalyzer, SentimentAnalyzer};
use super::solutions::{detect_user_solutions, UserSolutions};
use super::validation::{
    check_validation_compliance, sweep_exchanges, ValidationCompliance, ValidationSweep,
};

// ============================================================================
// Report
// ============================================================================

/// Every transcript-level metric for one conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub sentiment_authenticity: SentimentAuthenticity,
    pub question_ratio: QuestionRatio,
    pub user_pushback: UserPushback,
    pub user_solutions: UserSolutions,
    /// Smaller of the user and agent message counts
    pub exchange_count: usize,
}

// ============================================================================
// Analyzer
// ============================================================================

/// Scores a whole transcript
pub trait ConversationAnalyzer {
    fn analyze(&self, messages: &[Message]) -> Result<MetricsReport, MetricsError>;
}

#[derive(Clone)]
pub struct HumaneMetricsAnalyzer {
    sentiment: Arc<dyn SentimentAnalyzer>,
    limits: ScoringLimits,
}

impl HumaneMetricsAnalyzer {
    /// Built-in lexicon sentiment with default limits
    pub fn new() -> Self {
        Self::with_settings(
            Arc::new(LexiconSentimentAnalyzer::new()),
            ScoringLimits::default(),
        )
    }

    pub fn with_settings(sentiment: Arc<dyn SentimentAnalyzer>, limits: ScoringLimits) -> Self {
        Self { sentiment, limits }
    }

    pub fn limits(&self) -> &ScoringLimits {
        &self.limits
    }

    pub fn sentiment_authenticity(
        &self,
        user_messages: &[&str],
    ) -> Result<SentimentAuthenticity, MetricsError> {
        score_sentiment_authenticity(
            user_messages,
            self.sentiment.as_ref(),
            self.limits.recency_window,
        )
    }

    pub fn question_ratio(&self, agent_messages: &[&str]) -> QuestionRatio {
        calculate_question_ratio(agent_messages)
    }

    pub fn user_pushback(&self, user_messages: &[&str]) -> UserPushback {
        detect_user_pushback(
            user_messages,
            self.limits.pushback_snippet_chars,
            self.limits.pushback_max_examples,
        )
    }

    pub fn user_solutions(&self, user_messages: &[&str]) -> UserSolutions {
        detect_user_solutions(
            user_messages,
            self.limits.solution_snippet_chars,
            self.limits.scaffolding_min_messages,
        )
    }

    pub fn validation_compliance(
        &self,
        user_message: &str,
        agent_response: &str,
    ) -> ValidationCompliance {
        check_validation_compliance(user_message, agent_response)
    }

    pub fn validation_sweep(&self, messages: &[Message]) -> ValidationSweep {
        sweep_exchanges(messages)
    }
}

impl Default for HumaneMetricsAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HumaneMetricsAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumaneMetricsAnalyzer")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl ConversationAnalyzer for HumaneMetricsAnalyzer {
    fn analyze(&self, messages: &[Message]) -> Result<MetricsReport, MetricsError> {
        let user_messages = texts_for_role(messages, Role::User);
        let agent_messages = texts_for_role(messages, Role::Agent);
        debug!(
            total = messages.len(),
            user = user_messages.len(),
            agent = agent_messages.len(),
            "partitioned transcript"
        );

        let sentiment_authenticity = self.sentiment_authenticity(&user_messages)?;
        let question_ratio = self.question_ratio(&agent_messages);
        let user_pushback = self.user_pushback(&user_messages);
        let user_solutions = self.user_solutions(&user_messages);
        let exchange_count = user_messages.len().min(agent_messages.len());

        info!(
            authenticity = sentiment_authenticity.score,
            question_ratio = question_ratio.ratio,
            pushback_frequency = user_pushback.frequency,
            solutions = user_solutions.count,
            exchange_count,
            "scored transcript"
        );

        Ok(MetricsReport {
            sentiment_authenticity,
            question_ratio,
            user_pushback,
            user_solutions,
            exchange_count,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
