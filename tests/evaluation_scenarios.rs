use chrono::Utc;

use sherpa::document::{ArticleDraft, FeedbackEntry, LabeledExample};
use sherpa::engine::SupportEngine;
use sherpa::evaluation::metrics_from_feedback;

fn entry(article_id: &str, correct: bool, n: usize) -> FeedbackEntry {
    FeedbackEntry {
        id: format!("fb_{n}"),
        ticket_id: None,
        article_id: article_id.to_string(),
        correct,
        notes: String::new(),
        timestamp: Utc::now(),
    }
}

fn seeded_engine() -> SupportEngine {
    let engine = SupportEngine::in_memory();
    engine
        .add_article(ArticleDraft {
            title: "Tracking your order".to_string(),
            content: "information about delivery tracking and dispatch delay".to_string(),
        })
        .unwrap();
    engine
        .add_article(ArticleDraft {
            title: "Refund policy".to_string(),
            content: "refund return and exchange details".to_string(),
        })
        .unwrap();
    engine
}

#[test]
fn feedback_metrics_reference_values() {
    let log = vec![
        entry("a1", true, 1),
        entry("a1", false, 2),
        entry("a2", true, 3),
    ];
    let metrics = metrics_from_feedback(&log);

    assert_eq!(metrics.count_feedback, 3);
    assert_eq!(metrics.true_positives, 2);
    assert_eq!(metrics.false_positives, 1);
    assert_eq!(metrics.precision, 0.667);
    assert_eq!(metrics.recall, 0.667);
    assert_eq!(metrics.f1, 0.667);
}

#[test]
fn feedback_metrics_empty_log_is_all_zero() {
    let metrics = metrics_from_feedback(&[]);
    assert_eq!(metrics.count_feedback, 0);
    assert_eq!(metrics.precision, 0.0);
    assert_eq!(metrics.recall, 0.0);
    assert_eq!(metrics.f1, 0.0);
}

#[test]
fn engine_evaluates_its_own_feedback_log() {
    let engine = seeded_engine();
    engine.submit_feedback(Some("t_1"), "art_1", true, "").unwrap();
    engine.submit_feedback(Some("t_2"), "art_1", false, "").unwrap();
    engine.submit_feedback(Some("t_3"), "art_2", true, "").unwrap();

    let metrics = engine.evaluate_feedback().unwrap();
    assert_eq!(metrics.true_positives, 2);
    assert_eq!(metrics.false_positives, 1);
    assert_eq!(metrics.precision, 0.667);
}

#[test]
fn resubmitted_feedback_overwrites_not_duplicates() {
    let engine = seeded_engine();
    let (first, _) = engine
        .submit_feedback(Some("t_1"), "art_1", true, "looks right")
        .unwrap();
    let (second, _) = engine
        .submit_feedback(Some("t_1"), "art_1", false, "actually wrong")
        .unwrap();

    // Same id, refreshed judgment; the log did not grow.
    assert_eq!(first.id, second.id);
    let log = engine.list_feedback().unwrap();
    assert_eq!(log.len(), 1);
    assert!(!log[0].correct);

    let metrics = engine.evaluate_feedback().unwrap();
    assert_eq!(metrics.true_positives, 0);
    assert_eq!(metrics.false_positives, 1);
}

#[test]
fn dataset_evaluation_end_to_end() {
    let engine = seeded_engine();
    let dataset = vec![
        LabeledExample {
            description: "my delivery is delayed".to_string(),
            ground_truth_article_id: "art_1".to_string(),
        },
        LabeledExample {
            description: "i want a refund for a damaged item".to_string(),
            ground_truth_article_id: "art_2".to_string(),
        },
        LabeledExample {
            description: "where do i track my parcel delivery".to_string(),
            // Deliberately wrong label: prediction will be non-empty.
            ground_truth_article_id: "art_2".to_string(),
        },
    ];

    let report = engine.evaluate_dataset(&dataset, 1).unwrap();
    assert_eq!(report.count, 3);
    assert_eq!(report.true_positives, 2);
    assert_eq!(report.false_negatives, 1);
    // The miss had predictions, so it also counts as a false positive.
    assert_eq!(report.false_positives, 1);
    assert_eq!(report.precision, 0.667);
    assert_eq!(report.recall, 0.667);

    assert_eq!(report.details.len(), 3);
    assert!(report.details[0].hit);
    assert!(report.details[1].hit);
    assert!(!report.details[2].hit);
    assert_eq!(report.details[2].predicted, vec!["art_1"]);
}
