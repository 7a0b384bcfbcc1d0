//! Result rendering for the CLI.

use serde::Serialize;

use crate::alerts::Alert;
use crate::cli::args::{OutputFormat, SherpaArgs};
use crate::document::{Article, FeedbackEntry, Ticket};
use crate::engine::{GapOutcome, SupportEngine};
use crate::error::Result;
use crate::evaluation::{DatasetReport, FeedbackMetrics};
use crate::recommend::RankedArticle;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render ranked recommendations with article titles and snippets.
pub fn print_recommendations(
    args: &SherpaArgs,
    query: &str,
    results: &[RankedArticle],
    engine: &SupportEngine,
) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(&results);
    }

    println!("Query: {query}");
    if results.is_empty() {
        println!("No recommendations (knowledge base is empty).");
        return Ok(());
    }
    let articles = engine.list_articles()?;
    for (rank, result) in results.iter().enumerate() {
        let title = articles
            .iter()
            .find(|a| a.id == result.article_id)
            .map(|a| a.title.as_str())
            .unwrap_or("(unknown article)");
        println!(
            "{:>2}. {} [{}] score={:.3}",
            rank + 1,
            title,
            result.article_id,
            result.score
        );
    }
    Ok(())
}

/// Render a created article.
pub fn print_article(args: &SherpaArgs, article: &Article) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(article);
    }
    println!(
        "Added {} \"{}\" (category: {}, tags: {})",
        article.id,
        article.title,
        article.category,
        article.tags.join(", ")
    );
    Ok(())
}

/// Render a created ticket.
pub fn print_ticket(args: &SherpaArgs, ticket: &Ticket) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(ticket);
    }
    println!(
        "Created {} (category: {}, status: {})",
        ticket.id, ticket.category, ticket.status
    );
    if ticket.recommended_article_ids.is_empty() {
        println!("No article recommended.");
    } else {
        println!("Recommended: {}", ticket.recommended_article_ids.join(", "));
    }
    Ok(())
}

/// Render a recorded feedback entry.
pub fn print_feedback(args: &SherpaArgs, entry: &FeedbackEntry, accuracy: f64) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(entry);
    }
    println!(
        "Recorded {} for {} (correct: {}); overall accuracy {accuracy}%",
        entry.id, entry.article_id, entry.correct
    );
    Ok(())
}

/// Render feedback-derived metrics.
pub fn print_feedback_metrics(args: &SherpaArgs, metrics: &FeedbackMetrics) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(metrics);
    }
    println!("Feedback entries: {}", metrics.count_feedback);
    println!(
        "tp={} fp={} precision={:.3} recall={:.3} f1={:.3}",
        metrics.true_positives,
        metrics.false_positives,
        metrics.precision,
        metrics.recall,
        metrics.f1
    );
    Ok(())
}

/// Render a dataset evaluation report.
pub fn print_dataset_report(args: &SherpaArgs, report: &DatasetReport) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(report);
    }
    println!(
        "Evaluated {} examples: tp={} fp={} fn={}",
        report.count, report.true_positives, report.false_positives, report.false_negatives
    );
    println!(
        "precision={:.3} recall={:.3} f1={:.3}",
        report.precision, report.recall, report.f1
    );
    for detail in &report.details {
        let mark = if detail.hit { "HIT " } else { "MISS" };
        println!(
            "  [{mark}] {} -> {:?} (expected {})",
            detail.description, detail.predicted, detail.ground_truth
        );
    }
    Ok(())
}

/// Render a gap-analysis outcome.
pub fn print_gap_outcome(args: &SherpaArgs, outcome: &GapOutcome) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(outcome);
    }
    let summary = &outcome.report.summary;
    println!(
        "Coverage: {}% ({}/{} tickets), resolution rate: {}%",
        summary.coverage_percent,
        summary.tickets_with_recommendations,
        summary.total_tickets,
        summary.resolution_rate_percent
    );
    println!(
        "Articles: {}, feedback entries: {}, low-CTR articles: {}",
        summary.total_articles,
        summary.total_feedback,
        outcome.report.low_ctr.len()
    );
    for stat in &outcome.report.low_ctr {
        println!(
            "  low CTR: {} ({} impressions, {} clicks, {}%)",
            stat.article_id, stat.impressions, stat.clicks, stat.ctr
        );
    }
    if outcome.alerts_raised.is_empty() {
        println!("No alerts raised.");
    } else {
        for alert in &outcome.alerts_raised {
            println!("ALERT: {}", alert.message);
        }
    }
    Ok(())
}

/// Render pending alerts.
pub fn print_alerts(args: &SherpaArgs, alerts: &[Alert]) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(&alerts);
    }
    if alerts.is_empty() {
        println!("No pending alerts.");
        return Ok(());
    }
    for (index, alert) in alerts.iter().enumerate() {
        println!("{index}: [{}] {}", alert.timestamp, alert.message);
    }
    Ok(())
}
