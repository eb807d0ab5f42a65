use std::sync::Arc;

use common::configuration::{Configuration, ScoringLimits};
use common::errors::ErrorReport;
use common::transcript::{Message, Transcript};
use pretty_assertions::assert_eq;

use super::authenticity::AuthenticityDetails;
use super::{ConversationAnalyzer, HumaneMetricsAnalyzer, LexiconSentimentAnalyzer};

fn support_session() -> Vec<Message> {
    vec![
        Message::user("I feel so scared"),
        Message::agent("That sounds really scary. What has helped before?"),
        Message::user("I am terrified and hopeless"),
        Message::agent(
            "I hear you. You could try a short walk tomorrow. How does that sound?",
        ),
        Message::user("Today was a good day"),
    ]
}

#[test]
fn test_vulnerable_session_end_to_end() {
    let report = HumaneMetricsAnalyzer::new()
        .analyze(&support_session())
        .unwrap();

    let authenticity = &report.sentiment_authenticity;
    assert_eq!(authenticity.score, 100);
    assert_eq!(
        authenticity.reasoning,
        "Analyzed 3 messages. High authenticity - genuine emotional range and intensity."
    );
    assert_eq!(authenticity.details.unwrap().authenticity_bonus, 10);

    assert_eq!(report.question_ratio.total_sentences, 5);
    assert_eq!(report.question_ratio.questions, 3);
    assert_eq!(report.question_ratio.ratio, 60.0);

    assert_eq!(report.user_pushback.count, 0);
    assert_eq!(report.user_pushback.total, 3);
    assert_eq!(report.user_solutions.count, 0);
    assert!(!report.user_solutions.needs_scaffolding);
    assert_eq!(report.exchange_count, 2);
}

#[test]
fn test_performative_positivity_end_to_end() {
    let messages = vec![
        Message::user("I'm fine."),
        Message::agent("Okay."),
        Message::user("I\u{2019}m fine."),
        Message::agent("Alright."),
        Message::user("I'm fine."),
    ];

    let report = HumaneMetricsAnalyzer::new().analyze(&messages).unwrap();
    let authenticity = &report.sentiment_authenticity;

    assert_eq!(
        authenticity.details,
        Some(AuthenticityDetails {
            sentiment_variation: -10,
            emotional_intensity: 5,
            subjectivity: 10,
            performative_positivity_penalty: -30,
            authenticity_bonus: 0,
        })
    );
    assert_eq!(authenticity.score, 25);
    assert!(authenticity.reasoning.contains("Low authenticity"));
    assert_eq!(report.question_ratio.ratio, 0.0);
}

#[test]
fn test_validation_sweep_end_to_end() {
    let sweep = HumaneMetricsAnalyzer::new().validation_sweep(&support_session());

    assert_eq!(sweep.exchanges_checked, 2);
    assert_eq!(sweep.reframes, 1);
    assert_eq!(sweep.compliant_reframes, 1);
    assert_eq!(sweep.rate, 100);
    assert_eq!(sweep.results[1].message_index, 3);
    assert_eq!(sweep.results[1].result.validation_first, Some(true));
}

#[test]
fn test_transcript_json_round_into_report() {
    let transcript: Transcript = serde_json::from_str(
        r#"{"messages": [
            {"text": "I've tried that, but I can't", "role": "user"},
            {"text": "What makes it hard?", "role": "Assistant"},
            {"text": "Maybe I could ask for help", "role": "USER"},
            {"text": "[timer]", "role": "system"}
        ]}"#,
    )
    .unwrap();

    let report = HumaneMetricsAnalyzer::new()
        .analyze(&transcript.messages)
        .unwrap();
    assert_eq!(report.user_pushback.count, 1);
    assert_eq!(report.user_pushback.frequency, 50.0);
    assert_eq!(report.user_solutions.solutions, vec!["Maybe I could ask for help"]);
    assert_eq!(report.question_ratio.ratio, 100.0);
    assert_eq!(report.exchange_count, 1);
}

#[test]
fn test_overlong_message_reports_capability_failure() {
    let config = Configuration::from_yaml("sentiment:\n  max_text_length: 20\n").unwrap();
    let analyzer = HumaneMetricsAnalyzer::with_settings(
        Arc::new(LexiconSentimentAnalyzer::with_max_text_length(
            config.max_text_length(),
        )),
        ScoringLimits::default(),
    );

    let messages = vec![
        Message::user("short"),
        Message::user("this message is definitely longer than twenty characters"),
    ];
    let err = analyzer.analyze(&messages).unwrap_err();

    let body = err.to_report();
    assert_eq!(body["error"]["code"], "CapabilityFailure");
    assert_eq!(body["error"]["details"]["message_index"], 1);
}
