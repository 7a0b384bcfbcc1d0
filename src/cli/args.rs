//! Command line argument parsing for the Sherpa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Sherpa - knowledge-base recommendations for support tickets
#[derive(Parser, Debug, Clone)]
#[command(name = "sherpa")]
#[command(about = "Knowledge-base recommendation and evaluation engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SherpaArgs {
    /// Directory holding knowledge.json, tickets.json, feedback.json,
    /// impressions.json, alerts.json, and reports/
    #[arg(short, long, value_name = "DIR", default_value = "data", env = "SHERPA_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SherpaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose.max(1) }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank knowledge-base articles for a query
    Recommend(RecommendArgs),

    /// Add a knowledge-base article
    #[command(name = "add-article")]
    AddArticle(AddArticleArgs),

    /// Create a support ticket (classified and auto-recommended)
    #[command(name = "create-ticket")]
    CreateTicket(CreateTicketArgs),

    /// Record feedback for a recommended article
    Feedback(FeedbackArgs),

    /// Compute precision/recall/F1 from the feedback log
    #[command(name = "evaluate-feedback")]
    EvaluateFeedback,

    /// Evaluate the ranker against a labeled dataset
    #[command(name = "evaluate-dataset")]
    EvaluateDataset(EvaluateDatasetArgs),

    /// Run the gap analysis and threshold alerting cycle
    #[command(name = "gap-analysis")]
    GapAnalysis,

    /// List pending alerts
    Alerts,
}

/// Arguments for ranking a query
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// The query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Restrict candidates to a category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Number of results to return (defaults to the engine setting)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

/// Arguments for adding an article
#[derive(Parser, Debug, Clone)]
pub struct AddArticleArgs {
    /// Article title
    #[arg(short, long)]
    pub title: String,

    /// Article body
    #[arg(short = 'b', long)]
    pub content: String,
}

/// Arguments for creating a ticket
#[derive(Parser, Debug, Clone)]
pub struct CreateTicketArgs {
    /// Ticket title
    #[arg(short, long)]
    pub title: String,

    /// Issue description
    #[arg(short, long)]
    pub description: String,

    /// Customer name
    #[arg(short, long)]
    pub customer: String,
}

/// Arguments for recording feedback
#[derive(Parser, Debug, Clone)]
pub struct FeedbackArgs {
    /// The judged article
    #[arg(short, long)]
    pub article_id: String,

    /// The ticket the feedback refers to, if any
    #[arg(short, long)]
    pub ticket_id: Option<String>,

    /// Whether the recommendation was relevant
    #[arg(long, action = clap::ArgAction::Set)]
    pub correct: bool,

    /// Free-form notes
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

/// Arguments for dataset evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateDatasetArgs {
    /// Path to a JSON array of {description, ground_truth_article_id}
    #[arg(value_name = "DATASET_FILE")]
    pub dataset_file: PathBuf,

    /// Predictions considered per example
    #[arg(short = 'k', long, default_value_t = 1)]
    pub top_k: usize,
}
