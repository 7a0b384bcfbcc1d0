//! Labeled-dataset evaluation of the live ranker.

use serde::{Deserialize, Serialize};

use crate::document::{Article, LabeledExample};
use crate::evaluation::feedback::{harmonic_mean, round3};
use crate::recommend::Ranker;

/// Per-example prediction record, returned for auditability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDetail {
    /// The evaluated query.
    pub description: String,
    /// Expected article id.
    pub ground_truth: String,
    /// Predicted article ids, in rank order.
    pub predicted: Vec<String>,
    /// Whether the ground truth appeared among the predictions.
    pub hit: bool,
}

/// Aggregate dataset metrics plus per-example details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Number of evaluated examples.
    pub count: usize,
    /// Examples whose predictions contained the ground truth.
    pub true_positives: usize,
    /// Misses where the ranker still predicted something.
    pub false_positives: usize,
    /// Examples whose predictions missed the ground truth.
    pub false_negatives: usize,
    /// tp / (tp + fp), 0 when undefined.
    pub precision: f64,
    /// tp / (tp + fn), 0 when undefined.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// One record per evaluated example.
    pub details: Vec<PredictionDetail>,
}

/// Evaluate the ranker against a labeled dataset.
///
/// A hit is the ground-truth id appearing anywhere in the top-k
/// predictions. A miss always counts as a false negative and ALSO as a
/// false positive when the prediction list was non-empty — the counting
/// the historical metrics were built on, preserved for comparability.
pub fn evaluate_dataset(
    ranker: &Ranker,
    articles: &[Article],
    dataset: &[LabeledExample],
    top_k: usize,
) -> DatasetReport {
    let mut tp = 0;
    let mut fp = 0;
    let mut fn_count = 0;
    let mut details = Vec::with_capacity(dataset.len());

    for example in dataset {
        let predictions = ranker.rank(&example.description, articles, top_k, None);
        let predicted: Vec<String> = predictions.into_iter().map(|r| r.article_id).collect();
        let hit = predicted
            .iter()
            .any(|id| *id == example.ground_truth_article_id);

        if hit {
            tp += 1;
        } else {
            fn_count += 1;
            if !predicted.is_empty() {
                fp += 1;
            }
        }

        details.push(PredictionDetail {
            description: example.description.clone(),
            ground_truth: example.ground_truth_article_id.clone(),
            predicted,
            hit,
        });
    }

    let precision = if tp + fp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    let recall = if tp + fn_count > 0 {
        tp as f64 / (tp + fn_count) as f64
    } else {
        0.0
    };
    let f1 = harmonic_mean(precision, recall);

    DatasetReport {
        count: dataset.len(),
        true_positives: tp,
        false_positives: fp,
        false_negatives: fn_count,
        precision: round3(precision),
        recall: round3(recall),
        f1: round3(f1),
        details,
    }
}
