//! CLI command execution.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::alerts::Alert;
use crate::cli::args::{Command, SherpaArgs};
use crate::cli::output;
use crate::document::{
    Article, ArticleDraft, FeedbackEntry, ImpressionRecord, LabeledExample, Ticket, TicketDraft,
};
use crate::engine::{EngineConfig, EngineStores, SupportEngine};
use crate::error::Result;
use crate::storage::{
    MemoryArticleStore, MemoryFeedbackStore, MemoryImpressionLog, MemoryReportStore,
    MemoryTicketStore,
};

/// Execute the parsed command.
pub fn execute_command(args: SherpaArgs) -> Result<()> {
    let workspace = Workspace::open(&args.data_dir);
    let engine = workspace.engine()?;

    match &args.command {
        Command::Recommend(cmd) => {
            let top_k = cmd.top_k.unwrap_or(engine.config().predict_top_k);
            let results = engine.recommend(&cmd.query, cmd.category.as_deref(), top_k)?;
            workspace.persist(&engine)?;
            output::print_recommendations(&args, &cmd.query, &results, &engine)?;
        }
        Command::AddArticle(cmd) => {
            let article = engine.add_article(ArticleDraft {
                title: cmd.title.clone(),
                content: cmd.content.clone(),
            })?;
            workspace.persist(&engine)?;
            output::print_article(&args, &article)?;
        }
        Command::CreateTicket(cmd) => {
            let ticket = engine.create_ticket(TicketDraft {
                title: cmd.title.clone(),
                description: cmd.description.clone(),
                customer_name: cmd.customer.clone(),
            })?;
            workspace.persist(&engine)?;
            output::print_ticket(&args, &ticket)?;
        }
        Command::Feedback(cmd) => {
            let (entry, accuracy) = engine.submit_feedback(
                cmd.ticket_id.as_deref(),
                &cmd.article_id,
                cmd.correct,
                &cmd.notes,
            )?;
            workspace.persist(&engine)?;
            output::print_feedback(&args, &entry, accuracy)?;
        }
        Command::EvaluateFeedback => {
            let metrics = engine.evaluate_feedback()?;
            output::print_feedback_metrics(&args, &metrics)?;
        }
        Command::EvaluateDataset(cmd) => {
            let dataset: Vec<LabeledExample> = load_json(&cmd.dataset_file);
            let report = engine.evaluate_dataset(&dataset, cmd.top_k)?;
            output::print_dataset_report(&args, &report)?;
        }
        Command::GapAnalysis => {
            let outcome = engine.run_gap_analysis()?;
            let date_key = outcome.report.summary.date.format("%Y-%m-%d").to_string();
            workspace.persist_report(&date_key, &outcome.report)?;
            workspace.persist(&engine)?;
            output::print_gap_outcome(&args, &outcome)?;
        }
        Command::Alerts => {
            output::print_alerts(&args, &engine.pending_alerts())?;
        }
    }

    Ok(())
}

/// The on-disk JSON workspace backing a CLI invocation.
pub struct Workspace {
    data_dir: PathBuf,
}

impl Workspace {
    /// Open (without creating) a workspace rooted at `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Build an engine preloaded from the workspace files.
    pub fn engine(&self) -> Result<SupportEngine> {
        let articles: Vec<Article> = load_json(&self.path("knowledge.json"));
        let tickets: Vec<Ticket> = load_json(&self.path("tickets.json"));
        let feedback: Vec<FeedbackEntry> = load_json(&self.path("feedback.json"));
        let impressions: Vec<ImpressionRecord> = load_json(&self.path("impressions.json"));
        let alerts: Vec<Alert> = load_json(&self.path("alerts.json"));

        let stores = EngineStores {
            articles: Arc::new(MemoryArticleStore::with_articles(articles)),
            tickets: Arc::new(MemoryTicketStore::with_tickets(tickets)),
            feedback: Arc::new(MemoryFeedbackStore::with_entries(feedback)),
            impressions: Arc::new(MemoryImpressionLog::with_records(impressions)),
            reports: Arc::new(MemoryReportStore::new()),
        };

        let taxonomy = Arc::new(crate::intent::KeywordTaxonomy::default());
        let engine = SupportEngine::new(
            EngineConfig::default(),
            taxonomy.clone(),
            stores,
            Arc::new(crate::embedding::HashEmbedder::new()),
            Arc::new(crate::classify::KeywordClassifier::new(taxonomy)),
            Arc::new(crate::alerts::DisabledSink),
        );
        engine.restore_alerts(alerts);
        Ok(engine)
    }

    /// Write the mutable files back.
    pub fn persist(&self, engine: &SupportEngine) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        save_json(&self.path("knowledge.json"), &engine.list_articles()?)?;
        save_json(&self.path("tickets.json"), &engine.list_tickets()?)?;
        save_json(&self.path("feedback.json"), &engine.list_feedback()?)?;
        save_json(
            &self.path("impressions.json"),
            &engine.impression_records()?,
        )?;
        save_json(&self.path("alerts.json"), &engine.pending_alerts())?;
        Ok(())
    }

    /// Write one dated gap report under reports/.
    pub fn persist_report(&self, date_key: &str, report: &crate::gap::GapReport) -> Result<()> {
        let reports_dir = self.data_dir.join("reports");
        fs::create_dir_all(&reports_dir)?;
        save_json(
            &reports_dir.join(format!("daily_summary_{date_key}.json")),
            report,
        )
    }
}

/// Load a JSON file, degrading to the default on a missing or
/// unparseable file: stale history must never block the current run.
fn load_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %path.display(), %err, "unparseable data file, treating as empty");
                T::default()
            }
        },
        Err(_) => T::default(),
    }
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}
