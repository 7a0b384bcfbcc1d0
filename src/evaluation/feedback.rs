//! Metrics derived from the feedback log.

use serde::{Deserialize, Serialize};

use crate::document::FeedbackEntry;

/// Precision/recall/F1 over collected feedback.
///
/// Recall here is a pseudo-recall against the labeled-feedback volume,
/// not against a ground-truth universe: every feedback entry counts as
/// one labeled case, and `correct=true` entries are the hits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackMetrics {
    /// Number of feedback entries considered.
    pub count_feedback: usize,
    /// Entries with `correct = true`.
    pub true_positives: usize,
    /// Entries with `correct = false`.
    pub false_positives: usize,
    /// tp / (tp + fp), 0 when there is no feedback.
    pub precision: f64,
    /// tp / total, 0 when there is no feedback.
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0 when both are 0.
    pub f1: f64,
}

/// Compute metrics over the full feedback log.
pub fn metrics_from_feedback(entries: &[FeedbackEntry]) -> FeedbackMetrics {
    if entries.is_empty() {
        return FeedbackMetrics::default();
    }

    let tp = entries.iter().filter(|e| e.correct).count();
    let fp = entries.len() - tp;
    let total = entries.len();

    let precision = if tp + fp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    let recall = tp as f64 / total as f64;
    let f1 = harmonic_mean(precision, recall);

    FeedbackMetrics {
        count_feedback: total,
        true_positives: tp,
        false_positives: fp,
        precision: round3(precision),
        recall: round3(recall),
        f1: round3(f1),
    }
}

/// Share of correct feedback as a percentage, rounded to 2 decimals.
/// 0.0 when the log is empty. Feeds the accuracy alert threshold.
pub fn accuracy_percent(entries: &[FeedbackEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let correct = entries.iter().filter(|e| e.correct).count();
    round2(correct as f64 / entries.len() as f64 * 100.0)
}

pub(crate) fn harmonic_mean(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(article_id: &str, correct: bool) -> FeedbackEntry {
        FeedbackEntry {
            id: format!("fb_{article_id}_{correct}"),
            ticket_id: None,
            article_id: article_id.to_string(),
            correct,
            notes: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_metrics_reference_scenario() {
        let log = vec![entry("a1", true), entry("a1", false), entry("a2", true)];
        let metrics = metrics_from_feedback(&log);
        assert_eq!(metrics.true_positives, 2);
        assert_eq!(metrics.false_positives, 1);
        assert_eq!(metrics.precision, 0.667);
        assert_eq!(metrics.recall, 0.667);
        assert_eq!(metrics.f1, 0.667);
    }

    #[test]
    fn test_metrics_empty_log() {
        let metrics = metrics_from_feedback(&[]);
        assert_eq!(metrics, FeedbackMetrics::default());
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn test_metrics_all_incorrect() {
        let log = vec![entry("a1", false), entry("a2", false)];
        let metrics = metrics_from_feedback(&log);
        assert_eq!(metrics.true_positives, 0);
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn test_accuracy_percent() {
        let log = vec![entry("a1", true), entry("a2", false)];
        assert_eq!(accuracy_percent(&log), 50.0);
        assert_eq!(accuracy_percent(&[]), 0.0);

        let log = vec![entry("a1", true), entry("a2", true), entry("a3", false)];
        assert_eq!(accuracy_percent(&log), 66.67);
    }
}
