//! The support engine: the crate's primary entry point.
//!
//! Wires the stores and collaborator seams to the ranking, evaluation,
//! gap-analysis, and alerting components, and owns the cross-cutting
//! policies: input validation, id assignment, classifier fallback, and
//! impression logging after every ranking call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alerts::{Alert, AlertPolicy, AlertQueue, AlertThresholds, DisabledSink, NotificationSink};
use crate::classify::{CategoryClassifier, ClassificationSource, KeywordClassifier};
use crate::document::{
    Article, ArticleDraft, Category, FeedbackEntry, ImpressionRecord, LabeledExample, Ticket,
    TicketDraft, TicketStatus,
};
use crate::embedding::{HashEmbedder, TextEmbedder};
use crate::error::{Result, SherpaError};
use crate::evaluation::{
    DatasetReport, FeedbackMetrics, accuracy_percent, evaluate_dataset, metrics_from_feedback,
};
use crate::gap::{GapAnalyzer, GapReport, GapSummary};
use crate::intent::{IntentDetector, KeywordTaxonomy};
use crate::recommend::{RankedArticle, Ranker, RecommendConfig, ScoringEngine};
use crate::storage::{
    ArticleStore, FeedbackStore, ImpressionLog, MemoryArticleStore, MemoryFeedbackStore,
    MemoryImpressionLog, MemoryReportStore, MemoryTicketStore, ReportStore, TicketStore,
};

const MIN_TITLE_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 5;
const MIN_CONTENT_LEN: usize = 5;
const MIN_CUSTOMER_NAME_LEN: usize = 2;

/// Engine-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scoring weights.
    pub recommend: RecommendConfig,
    /// Alerting thresholds.
    pub thresholds: AlertThresholds,
    /// Recommendations attached to a ticket at creation.
    pub ticket_top_k: usize,
    /// Default result count for ad-hoc queries.
    pub predict_top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recommend: RecommendConfig::default(),
            thresholds: AlertThresholds::default(),
            ticket_top_k: 1,
            predict_top_k: 3,
        }
    }
}

/// The injected persistence seams.
#[derive(Debug, Clone)]
pub struct EngineStores {
    /// Knowledge-base articles.
    pub articles: Arc<dyn ArticleStore>,
    /// Support tickets.
    pub tickets: Arc<dyn TicketStore>,
    /// Feedback entries.
    pub feedback: Arc<dyn FeedbackStore>,
    /// Append-only impression log.
    pub impressions: Arc<dyn ImpressionLog>,
    /// Dated gap-report snapshots.
    pub reports: Arc<dyn ReportStore>,
}

impl EngineStores {
    /// Fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            articles: Arc::new(MemoryArticleStore::new()),
            tickets: Arc::new(MemoryTicketStore::new()),
            feedback: Arc::new(MemoryFeedbackStore::new()),
            impressions: Arc::new(MemoryImpressionLog::new()),
            reports: Arc::new(MemoryReportStore::new()),
        }
    }
}

/// Result of one gap-analysis cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapOutcome {
    /// The persisted report.
    pub report: GapReport,
    /// Alerts raised by the policy during this cycle.
    pub alerts_raised: Vec<Alert>,
}

/// The assembled recommendation engine.
#[derive(Debug)]
pub struct SupportEngine {
    config: EngineConfig,
    stores: EngineStores,
    embedder: Arc<dyn TextEmbedder>,
    classifier: Arc<dyn CategoryClassifier>,
    ranker: Ranker,
    analyzer: GapAnalyzer,
    policy: AlertPolicy,
    alerts: AlertQueue,
}

impl SupportEngine {
    /// Assemble an engine from explicit parts.
    pub fn new(
        config: EngineConfig,
        taxonomy: Arc<KeywordTaxonomy>,
        stores: EngineStores,
        embedder: Arc<dyn TextEmbedder>,
        classifier: Arc<dyn CategoryClassifier>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let scorer = ScoringEngine::new(
            embedder.clone(),
            IntentDetector::new(taxonomy),
            config.recommend.clone(),
        );
        let analyzer = GapAnalyzer::new(
            stores.articles.clone(),
            stores.tickets.clone(),
            stores.feedback.clone(),
            stores.impressions.clone(),
            stores.reports.clone(),
            config.thresholds.low_ctr_percent,
        );
        let policy = AlertPolicy::new(config.thresholds.clone());

        Self {
            config,
            stores,
            embedder,
            classifier,
            ranker: Ranker::new(scorer),
            analyzer,
            policy,
            alerts: AlertQueue::new(sink),
        }
    }

    /// An engine over in-memory stores with the default components and
    /// no notification sink (alerts queue as pending).
    pub fn in_memory() -> Self {
        Self::in_memory_with_sink(Arc::new(DisabledSink))
    }

    /// An engine over in-memory stores delivering through `sink`.
    pub fn in_memory_with_sink(sink: Arc<dyn NotificationSink>) -> Self {
        let taxonomy = Arc::new(KeywordTaxonomy::default());
        Self::new(
            EngineConfig::default(),
            taxonomy.clone(),
            EngineStores::in_memory(),
            Arc::new(HashEmbedder::new()),
            Arc::new(KeywordClassifier::new(taxonomy)),
            sink,
        )
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ---- Knowledge base ----

    /// Create a knowledge-base article.
    ///
    /// The category is classified from the title and the tags from the
    /// content; either failing degrades to `Other`/empty rather than
    /// aborting. The embedding is computed once, from title + content.
    pub fn add_article(&self, draft: ArticleDraft) -> Result<Article> {
        let title = draft.title.trim();
        let content = draft.content.trim();
        if title.len() < MIN_TITLE_LEN {
            return Err(SherpaError::invalid_input(format!(
                "title must be at least {MIN_TITLE_LEN} characters"
            )));
        }
        if content.len() < MIN_CONTENT_LEN {
            return Err(SherpaError::invalid_input(format!(
                "content must be at least {MIN_CONTENT_LEN} characters"
            )));
        }

        let category = self.classify_or_default(title);
        let tags = self.tags_or_default(content);

        let mut article = Article {
            id: format!("art_{}", self.stores.articles.count()? + 1),
            title: title.to_string(),
            content: content.to_string(),
            category,
            tags,
            embedding: Vec::new(),
        };
        article.embedding = match self.embedder.embed(&article.searchable_text()) {
            Ok(vector) => vector,
            Err(err) => {
                warn!(provider = self.embedder.name(), %err, "article embedding unavailable");
                Vec::new()
            }
        };

        self.stores.articles.append(article.clone())?;
        Ok(article)
    }

    /// All articles.
    pub fn list_articles(&self) -> Result<Vec<Article>> {
        self.stores.articles.list()
    }

    // ---- Tickets ----

    /// Create a ticket, classify it, and attach recommendations.
    ///
    /// The ranking result is a point-in-time snapshot stored on the
    /// ticket and logged as one impression record. Classifier and
    /// ranking failures degrade (Other category, no recommendations);
    /// only invalid input or a failed ticket write surface as errors.
    pub fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket> {
        let title = draft.title.trim();
        let description = draft.description.trim();
        let customer_name = draft.customer_name.trim();
        if customer_name.len() < MIN_CUSTOMER_NAME_LEN {
            return Err(SherpaError::invalid_input(format!(
                "customer_name must be at least {MIN_CUSTOMER_NAME_LEN} characters"
            )));
        }
        if title.len() < MIN_TITLE_LEN {
            return Err(SherpaError::invalid_input(format!(
                "title must be at least {MIN_TITLE_LEN} characters"
            )));
        }
        if description.len() < MIN_DESCRIPTION_LEN {
            return Err(SherpaError::invalid_input(format!(
                "description must be at least {MIN_DESCRIPTION_LEN} characters"
            )));
        }

        let category = self.classify_or_default(description);
        let tags = self.tags_or_default(description);

        let recommended = match self.stores.articles.list() {
            Ok(articles) => self.ranker.rank(
                description,
                &articles,
                self.config.ticket_top_k,
                Some(category.as_str()),
            ),
            Err(err) => {
                warn!(%err, "knowledge base unavailable, ticket gets no recommendations");
                Vec::new()
            }
        };
        let recommended_ids: Vec<String> =
            recommended.into_iter().map(|r| r.article_id).collect();

        let ticket = Ticket {
            id: format!("t_{}", self.stores.tickets.count()? + 1),
            title: title.to_string(),
            description: description.to_string(),
            customer_name: customer_name.to_string(),
            category,
            tags,
            status: TicketStatus::Open,
            created_at: chrono::Utc::now(),
            updated_at: None,
            recommended_article_ids: recommended_ids.clone(),
        };
        self.stores.tickets.append(ticket.clone())?;

        self.log_impression(Some(ticket.id.clone()), description, recommended_ids);
        Ok(ticket)
    }

    /// All tickets.
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.stores.tickets.list()
    }

    /// Update the status of an existing ticket.
    pub fn update_ticket_status(&self, ticket_id: &str, status: TicketStatus) -> Result<Ticket> {
        let mut ticket = self
            .stores
            .tickets
            .get(ticket_id)?
            .ok_or_else(|| SherpaError::not_found(format!("ticket {ticket_id}")))?;
        ticket.status = status;
        ticket.updated_at = Some(chrono::Utc::now());
        self.stores.tickets.update(ticket.clone())?;
        Ok(ticket)
    }

    // ---- Recommendation ----

    /// Rank the knowledge base for an ad-hoc query.
    ///
    /// The primary recommendation entry point: every call appends one
    /// impression record. A failed log append is non-fatal — the
    /// results still return, the impression is lost.
    pub fn recommend(
        &self,
        query: &str,
        category: Option<&str>,
        top_k: usize,
    ) -> Result<Vec<RankedArticle>> {
        if query.trim().is_empty() {
            return Err(SherpaError::invalid_input("query must not be empty"));
        }

        let articles = self.stores.articles.list()?;
        let results = self.ranker.rank(query, &articles, top_k, category);

        let recommended_ids: Vec<String> =
            results.iter().map(|r| r.article_id.clone()).collect();
        self.log_impression(None, query.trim(), recommended_ids);

        Ok(results)
    }

    // ---- Feedback ----

    /// Record a judgment for a `(ticket, article)` pair.
    ///
    /// At most one entry exists per pair: a repeat submission overwrites
    /// the stored entry in place (same id, refreshed judgment and
    /// timestamp). Returns the entry and the updated overall accuracy;
    /// accuracy below the threshold raises an alert.
    pub fn submit_feedback(
        &self,
        ticket_id: Option<&str>,
        article_id: &str,
        correct: bool,
        notes: &str,
    ) -> Result<(FeedbackEntry, f64)> {
        if article_id.trim().is_empty() {
            return Err(SherpaError::invalid_input("article_id is required"));
        }

        let existing = self
            .stores
            .feedback
            .list()?
            .into_iter()
            .find(|e| e.matches_pair(ticket_id, article_id));

        let entry = FeedbackEntry {
            id: match &existing {
                Some(entry) => entry.id.clone(),
                None => format!("fb_{}", self.stores.feedback.count()? + 1),
            },
            ticket_id: ticket_id.map(str::to_string),
            article_id: article_id.to_string(),
            correct,
            notes: notes.to_string(),
            timestamp: chrono::Utc::now(),
        };
        self.stores.feedback.put(entry.clone())?;

        let accuracy = accuracy_percent(&self.stores.feedback.list()?);
        if let Some(message) = self.policy.evaluate_accuracy(accuracy) {
            self.alerts.raise(&message);
        }

        Ok((entry, accuracy))
    }

    /// All feedback entries.
    pub fn list_feedback(&self) -> Result<Vec<FeedbackEntry>> {
        self.stores.feedback.list()
    }

    /// The full impression log, oldest first.
    pub fn impression_records(&self) -> Result<Vec<ImpressionRecord>> {
        self.stores.impressions.read_all()
    }

    // ---- Evaluation ----

    /// Precision/recall/F1 over the collected feedback log.
    pub fn evaluate_feedback(&self) -> Result<FeedbackMetrics> {
        Ok(metrics_from_feedback(&self.stores.feedback.list()?))
    }

    /// Evaluate the live ranker against a labeled dataset.
    pub fn evaluate_dataset(
        &self,
        dataset: &[LabeledExample],
        top_k: usize,
    ) -> Result<DatasetReport> {
        let articles = self.stores.articles.list()?;
        Ok(evaluate_dataset(&self.ranker, &articles, dataset, top_k))
    }

    // ---- Gap analysis & alerting ----

    /// One evaluation cycle: retry pending alert deliveries, run the
    /// gap analysis (persisting a dated snapshot), and raise an alert
    /// for every threshold the fresh numbers cross.
    pub fn run_gap_analysis(&self) -> Result<GapOutcome> {
        let redelivered = self.alerts.flush();
        if redelivered > 0 {
            debug!(redelivered, "pending alerts delivered");
        }

        let report = self.analyzer.run()?;

        let mut messages = self.policy.evaluate(&report.summary, &report.low_ctr);
        let accuracy = accuracy_percent(&self.stores.feedback.list()?);
        if report.summary.total_feedback > 0
            && let Some(message) = self.policy.evaluate_accuracy(accuracy)
        {
            messages.push(message);
        }

        let alerts_raised = messages
            .iter()
            .map(|message| self.alerts.raise(message).0)
            .collect();

        Ok(GapOutcome {
            report,
            alerts_raised,
        })
    }

    /// The current summary, without persisting a snapshot.
    pub fn analytics(&self) -> Result<GapSummary> {
        Ok(self.analyzer.compute()?.summary)
    }

    /// Alerts still awaiting delivery.
    pub fn pending_alerts(&self) -> Vec<Alert> {
        self.alerts.pending()
    }

    /// Reload pending alerts persisted by a previous process.
    pub fn restore_alerts(&self, alerts: Vec<Alert>) {
        self.alerts.restore(alerts);
    }

    /// Raise an operator-initiated alert.
    pub fn trigger_alert(&self, message: &str) -> Alert {
        self.alerts.raise(message).0
    }

    /// Remove a pending alert by position.
    pub fn delete_alert_at(&self, index: usize) -> Result<Alert> {
        self.alerts.delete_at(index)
    }

    /// Remove pending alerts by timestamp; returns how many matched.
    pub fn delete_alerts_by_timestamp(&self, timestamp: chrono::DateTime<chrono::Utc>) -> usize {
        self.alerts.delete_by_timestamp(timestamp)
    }

    // ---- Internal helpers ----

    fn classify_or_default(&self, text: &str) -> Category {
        match self.classifier.classify(text) {
            Ok(outcome) => {
                if let ClassificationSource::Fallback { reason } = &outcome.source {
                    debug!(classifier = self.classifier.name(), %reason, "category defaulted");
                }
                outcome.category
            }
            Err(err) => {
                warn!(classifier = self.classifier.name(), %err, "classification failed, using Other");
                Category::Other
            }
        }
    }

    fn tags_or_default(&self, text: &str) -> Vec<String> {
        match self.classifier.tags(text) {
            Ok(tags) => tags,
            Err(err) => {
                warn!(classifier = self.classifier.name(), %err, "tag extraction failed, using none");
                Vec::new()
            }
        }
    }

    fn log_impression(&self, ticket_id: Option<String>, description: &str, ids: Vec<String>) {
        let record = ImpressionRecord {
            timestamp: chrono::Utc::now(),
            ticket_id,
            description: description.to_string(),
            recommended_ids: ids,
        };
        if let Err(err) = self.stores.impressions.append(record) {
            warn!(%err, "impression log append failed, record dropped");
        }
    }
}
