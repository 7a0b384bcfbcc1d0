//! Alert thresholds and policy.

use serde::{Deserialize, Serialize};

use crate::gap::{GapSummary, PerArticleStat};

/// Static thresholds the policy evaluates against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Minimum acceptable ticket coverage, in percent.
    pub min_coverage_percent: f64,
    /// CTR below this percentage flags an article.
    pub low_ctr_percent: f64,
    /// Minimum acceptable feedback accuracy, in percent.
    pub min_accuracy_percent: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            min_coverage_percent: 70.0,
            low_ctr_percent: 10.0,
            min_accuracy_percent: 60.0,
        }
    }
}

/// Pure function of the latest gap summary and feedback accuracy.
///
/// Each crossed threshold yields its own message; simultaneous alerts
/// are emitted as a set, never collapsed into one.
#[derive(Debug, Clone, Default)]
pub struct AlertPolicy {
    thresholds: AlertThresholds,
}

impl AlertPolicy {
    /// Create a policy with the given thresholds.
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    /// The configured thresholds.
    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Evaluate the gap-analysis output.
    pub fn evaluate(&self, summary: &GapSummary, low_ctr: &[PerArticleStat]) -> Vec<String> {
        let mut messages = Vec::new();

        if summary.coverage_percent < self.thresholds.min_coverage_percent {
            messages.push(format!("Low coverage: {}%", summary.coverage_percent));
        }

        if !low_ctr.is_empty() {
            messages.push(format!(
                "{} low-CTR articles (CTR < {}%)",
                low_ctr.len(),
                self.thresholds.low_ctr_percent
            ));
        }

        messages
    }

    /// Evaluate the feedback-derived accuracy.
    pub fn evaluate_accuracy(&self, accuracy_percent: f64) -> Option<String> {
        if accuracy_percent < self.thresholds.min_accuracy_percent {
            Some(format!(
                "Accuracy dropped to {accuracy_percent}% - please review recommendations"
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary(coverage: f64) -> GapSummary {
        GapSummary {
            date: Utc::now(),
            total_articles: 1,
            total_tickets: 0,
            tickets_with_recommendations: 0,
            coverage_percent: coverage,
            resolution_rate_percent: 0.0,
            total_feedback: 0,
        }
    }

    fn low_ctr_stat() -> PerArticleStat {
        PerArticleStat {
            article_id: "a1".to_string(),
            title: None,
            impressions: 20,
            clicks: 1,
            ctr: 5.0,
        }
    }

    #[test]
    fn test_healthy_summary_raises_nothing() {
        let policy = AlertPolicy::default();
        assert!(policy.evaluate(&summary(95.0), &[]).is_empty());
        assert!(policy.evaluate_accuracy(80.0).is_none());
    }

    #[test]
    fn test_low_coverage_alert() {
        let policy = AlertPolicy::default();
        let messages = policy.evaluate(&summary(42.5), &[]);
        assert_eq!(messages, vec!["Low coverage: 42.5%"]);
    }

    #[test]
    fn test_zero_tickets_counts_as_low_coverage() {
        // No tickets at all yields 0% coverage, which is below threshold.
        let policy = AlertPolicy::default();
        let messages = policy.evaluate(&summary(0.0), &[]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Low coverage"));
    }

    #[test]
    fn test_low_ctr_alert() {
        let policy = AlertPolicy::default();
        let messages = policy.evaluate(&summary(100.0), &[low_ctr_stat()]);
        assert_eq!(messages, vec!["1 low-CTR articles (CTR < 10%)"]);
    }

    #[test]
    fn test_simultaneous_alerts_are_separate_messages() {
        let policy = AlertPolicy::default();
        let messages = policy.evaluate(&summary(10.0), &[low_ctr_stat()]);
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_accuracy_alert() {
        let policy = AlertPolicy::default();
        let message = policy.evaluate_accuracy(50.0).unwrap();
        assert!(message.contains("50%"));
        assert!(policy.evaluate_accuracy(60.0).is_none());
    }
}
