//! `humane_metrics` - score therapy and coaching transcripts from the command line
//!
//! Every subcommand reads JSON input (a file path, or `-` for stdin) and prints
//! its result as pretty JSON on stdout. Failures are rendered as
//! `{"error": {"code", "message", "details"}}` on stderr with a non-zero exit.

use clap::{Parser, Subcommand};
use common::configuration::Configuration;
use common::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use common::errors::{ConfigurationError, ErrorReport, MetricsError, TranscriptError};
use common::transcript::Transcript;
use humane_metrics::signals::{
    ConversationAnalyzer, HumaneMetricsAnalyzer, LexiconSentimentAnalyzer, MetricsReport,
};
use humane_metrics::utils::tracing::init_tracer;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, error, info, info_span};

#[derive(Parser)]
#[command(name = "humane_metrics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Humane conversation metrics for therapy and coaching transcripts", long_about = None)]
struct Cli {
    /// Configuration file (missing file means built-in defaults)
    #[arg(long, global = true, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Every transcript-level metric at once
    All {
        /// Transcript JSON file, or `-` for stdin
        transcript: String,
    },

    /// Genuine emotional expression vs. performative positivity
    SentimentAuthenticity { transcript: String },

    /// Share of agent sentences that are questions
    QuestionRatio { transcript: String },

    /// How often the user resists suggestions
    UserPushback { transcript: String },

    /// User-generated solutions and whether scaffolding is needed
    UserSolutions { transcript: String },

    /// Check one agent response for validation before reframing
    ValidationCompliance {
        #[arg(long)]
        user_message: String,

        #[arg(long)]
        agent_response: String,
    },

    /// Check every user -> agent exchange in a transcript
    ValidationSweep { transcript: String },

    /// Score many transcripts concurrently; output follows input order
    Batch {
        #[arg(required = true)]
        transcripts: Vec<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("scoring task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{failed} of {total} transcripts failed to score")]
    Batch { failed: usize, total: usize },
}

impl CliError {
    fn report(&self) -> Value {
        match self {
            CliError::Configuration(err) => err.to_report(),
            CliError::Transcript(err) => err.to_report(),
            CliError::Metrics(err) => err.to_report(),
            CliError::Output(err) => {
                json!({ "error": { "code": "OutputFailure", "message": err.to_string(), "details": {} } })
            }
            CliError::Task(err) => {
                json!({ "error": { "code": "TaskFailure", "message": self.to_string(), "details": { "panicked": err.is_panic() } } })
            }
            CliError::Batch { failed, total } => json!({
                "error": {
                    "code": "BatchFailure",
                    "message": self.to_string(),
                    "details": { "failed": failed, "total": total }
                }
            }),
        }
    }
}

fn read_transcript(source: &str) -> Result<Transcript, TranscriptError> {
    let io_error = |source_err: io::Error| TranscriptError::Io {
        path: source.to_string(),
        source: source_err,
    };

    let contents = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        fs::read_to_string(source).map_err(io_error)?
    };

    let transcript: Transcript = serde_json::from_str(&contents)?;
    debug!(source, messages = transcript.messages.len(), "loaded transcript");
    Ok(transcript)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Scores every source on its own blocking task and returns one entry per
/// source, in input order, plus the number of failures.
async fn score_batch<F>(sources: Vec<String>, score: F) -> (Vec<Value>, usize)
where
    F: Fn(&str) -> Result<MetricsReport, CliError> + Send + Sync + 'static,
{
    let score = Arc::new(score);
    let handles: Vec<_> = sources
        .iter()
        .cloned()
        .map(|source| {
            let score = Arc::clone(&score);
            tokio::task::spawn_blocking(move || {
                let _span = info_span!("score", transcript = %source).entered();
                score(&source)
            })
        })
        .collect();

    let mut entries = Vec::with_capacity(sources.len());
    let mut failed = 0;
    for (source, handle) in sources.into_iter().zip(handles) {
        let outcome = handle.await.map_err(CliError::from).and_then(|scored| scored);

        match outcome {
            Ok(report) => entries.push(json!({ "transcript": source, "report": report })),
            Err(err) => {
                error!(transcript = %source, error = %err, "failed to score transcript");
                failed += 1;
                let mut body = err.report();
                body["transcript"] = json!(source);
                entries.push(body);
            }
        }
    }

    (entries, failed)
}

async fn run_batch(analyzer: Arc<HumaneMetricsAnalyzer>, sources: Vec<String>) -> Result<(), CliError> {
    let total = sources.len();
    let (entries, failed) = score_batch(sources, move |source| {
        let transcript = read_transcript(source)?;
        Ok(analyzer.analyze(&transcript.messages)?)
    })
    .await;

    print_json(&entries)?;
    info!(total, failed, "batch complete");

    if failed > 0 {
        return Err(CliError::Batch { failed, total });
    }
    Ok(())
}

async fn run(cli: Cli, config: Configuration) -> Result<(), CliError> {
    let analyzer = Arc::new(HumaneMetricsAnalyzer::with_settings(
        Arc::new(LexiconSentimentAnalyzer::with_max_text_length(
            config.max_text_length(),
        )),
        config.scoring_limits(),
    ));

    match cli.command {
        Commands::All { transcript } => {
            let transcript = read_transcript(&transcript)?;
            print_json(&analyzer.analyze(&transcript.messages)?)
        }
        Commands::SentimentAuthenticity { transcript } => {
            let transcript = read_transcript(&transcript)?;
            print_json(&analyzer.sentiment_authenticity(&transcript.user_texts())?)
        }
        Commands::QuestionRatio { transcript } => {
            let transcript = read_transcript(&transcript)?;
            print_json(&analyzer.question_ratio(&transcript.agent_texts()))
        }
        Commands::UserPushback { transcript } => {
            let transcript = read_transcript(&transcript)?;
            print_json(&analyzer.user_pushback(&transcript.user_texts()))
        }
        Commands::UserSolutions { transcript } => {
            let transcript = read_transcript(&transcript)?;
            print_json(&analyzer.user_solutions(&transcript.user_texts()))
        }
        Commands::ValidationCompliance {
            user_message,
            agent_response,
        } => print_json(&analyzer.validation_compliance(&user_message, &agent_response)),
        Commands::ValidationSweep { transcript } => {
            let transcript = read_transcript(&transcript)?;
            print_json(&analyzer.validation_sweep(&transcript.messages))
        }
        Commands::Batch { transcripts } => run_batch(analyzer, transcripts).await,
    }
}

fn fail(err: &CliError) -> ExitCode {
    error!(error = %err, "humane_metrics failed");
    eprintln!("{}", err.report());
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // configuration is loaded before tracing init so the log level can come from it
    let config = match Configuration::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            init_tracer(common::consts::DEFAULT_LOG_LEVEL);
            return fail(&CliError::from(err));
        }
    };
    init_tracer(config.log_level());
    info!(config = %cli.config.display(), version = ?config.version, "loaded configuration");

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}
