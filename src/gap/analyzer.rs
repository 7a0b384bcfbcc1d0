//! Gap analyzer implementation.

use std::sync::Arc;

use ahash::AHashMap;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::info;

use crate::error::Result;
use crate::evaluation::feedback::round2;
use crate::gap::report::{GapReport, GapSummary, PerArticleStat};
use crate::storage::{ArticleStore, FeedbackStore, ImpressionLog, ReportStore, TicketStore};

/// Aggregates logs into per-article stats and a coverage summary.
///
/// `compute` is a pure read-aggregate pass; `run` additionally persists
/// a dated snapshot. Runs are serialized against each other by an
/// internal guard, since two concurrent runs would race on the same
/// date's snapshot. Each invocation is idempotent.
#[derive(Debug)]
pub struct GapAnalyzer {
    articles: Arc<dyn ArticleStore>,
    tickets: Arc<dyn TicketStore>,
    feedback: Arc<dyn FeedbackStore>,
    impressions: Arc<dyn ImpressionLog>,
    reports: Arc<dyn ReportStore>,
    low_ctr_threshold: f64,
    run_guard: Mutex<()>,
}

impl GapAnalyzer {
    /// Create a gap analyzer over the given stores.
    pub fn new(
        articles: Arc<dyn ArticleStore>,
        tickets: Arc<dyn TicketStore>,
        feedback: Arc<dyn FeedbackStore>,
        impressions: Arc<dyn ImpressionLog>,
        reports: Arc<dyn ReportStore>,
        low_ctr_threshold: f64,
    ) -> Self {
        Self {
            articles,
            tickets,
            feedback,
            impressions,
            reports,
            low_ctr_threshold,
            run_guard: Mutex::new(()),
        }
    }

    /// Aggregate the current logs without persisting anything.
    pub fn compute(&self) -> Result<GapReport> {
        let articles = self.articles.list()?;
        let tickets = self.tickets.list()?;
        let feedback = self.feedback.list()?;
        let impressions = self.impressions.read_all()?;

        let mut impression_counts: AHashMap<String, u64> = AHashMap::new();
        for record in &impressions {
            for article_id in &record.recommended_ids {
                *impression_counts.entry(article_id.clone()).or_insert(0) += 1;
            }
        }

        let mut click_counts: AHashMap<String, u64> = AHashMap::new();
        for entry in &feedback {
            if entry.correct {
                *click_counts.entry(entry.article_id.clone()).or_insert(0) += 1;
            }
        }

        let per_article: Vec<PerArticleStat> = articles
            .iter()
            .map(|article| {
                let impressions = impression_counts.get(&article.id).copied().unwrap_or(0);
                let clicks = click_counts.get(&article.id).copied().unwrap_or(0);
                let ctr = if impressions > 0 {
                    round2(clicks as f64 / impressions as f64 * 100.0)
                } else {
                    0.0
                };
                PerArticleStat {
                    article_id: article.id.clone(),
                    title: Some(article.title.clone()),
                    impressions,
                    clicks,
                    ctr,
                }
            })
            .collect();

        let total_tickets = tickets.len();
        let recommended: Vec<_> = tickets
            .iter()
            .filter(|t| !t.recommended_article_ids.is_empty())
            .collect();
        let coverage_percent = if total_tickets > 0 {
            round2(recommended.len() as f64 / total_tickets as f64 * 100.0)
        } else {
            0.0
        };
        let resolution_rate_percent = if !recommended.is_empty() {
            let concluded = recommended.iter().filter(|t| t.status.is_concluded()).count();
            round2(concluded as f64 / recommended.len() as f64 * 100.0)
        } else {
            0.0
        };

        let low_ctr: Vec<PerArticleStat> = per_article
            .iter()
            .filter(|stat| stat.impressions > 0 && stat.ctr < self.low_ctr_threshold)
            .cloned()
            .collect();

        Ok(GapReport {
            summary: GapSummary {
                date: Utc::now(),
                total_articles: articles.len(),
                total_tickets,
                tickets_with_recommendations: recommended.len(),
                coverage_percent,
                resolution_rate_percent,
                total_feedback: feedback.len(),
            },
            per_article,
            low_ctr,
        })
    }

    /// Aggregate and persist a dated snapshot.
    ///
    /// The snapshot key is the UTC date; rerunning on the same date
    /// replaces that date's snapshot and never touches earlier dates.
    pub fn run(&self) -> Result<GapReport> {
        let _guard = self.run_guard.lock();

        let report = self.compute()?;
        let date_key = report.summary.date.format("%Y-%m-%d").to_string();
        self.reports.write_snapshot(&date_key, &report)?;

        info!(
            date = %date_key,
            coverage = report.summary.coverage_percent,
            resolution_rate = report.summary.resolution_rate_percent,
            low_ctr_count = report.low_ctr.len(),
            "gap analysis complete"
        );

        Ok(report)
    }
}
