use std::sync::Arc;

use sherpa::alerts::MemorySink;
use sherpa::document::{ArticleDraft, TicketDraft, TicketStatus};
use sherpa::engine::SupportEngine;

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
fn ctr_from_impressions_and_clicks() {
    let engine = seeded_engine();

    // 10 impressions of art_1 through ad-hoc queries.
    for _ in 0..10 {
        engine.recommend("my delivery is delayed", None, 1).unwrap();
    }
    // 2 correct-feedback entries from distinct tickets.
    engine.submit_feedback(Some("t_a"), "art_1", true, "").unwrap();
    engine.submit_feedback(Some("t_b"), "art_1", true, "").unwrap();

    let outcome = engine.run_gap_analysis().unwrap();
    let stat = outcome
        .report
        .per_article
        .iter()
        .find(|s| s.article_id == "art_1")
        .unwrap();

    assert_eq!(stat.impressions, 10);
    assert_eq!(stat.clicks, 2);
    assert_eq!(stat.ctr, 20.0);
    // 20% CTR is above the 10% threshold: not flagged.
    assert!(outcome.report.low_ctr.iter().all(|s| s.article_id != "art_1"));
}

#[test]
fn low_ctr_articles_are_flagged() {
    let engine = seeded_engine();

    for _ in 0..20 {
        engine.recommend("my delivery is delayed", None, 1).unwrap();
    }
    engine.submit_feedback(Some("t_a"), "art_1", true, "").unwrap();

    let outcome = engine.run_gap_analysis().unwrap();
    let stat = outcome
        .report
        .low_ctr
        .iter()
        .find(|s| s.article_id == "art_1")
        .unwrap();
    assert_eq!(stat.ctr, 5.0);

    // A low-CTR alert is raised alongside the coverage alert.
    assert!(
        outcome
            .alerts_raised
            .iter()
            .any(|a| a.message.contains("low-CTR"))
    );
}

#[test]
fn unshown_articles_are_not_flagged() {
    let engine = seeded_engine();
    let outcome = engine.run_gap_analysis().unwrap();

    // Zero impressions: ctr is 0.0 but nothing is flagged.
    assert!(outcome.report.low_ctr.is_empty());
    for stat in &outcome.report.per_article {
        assert_eq!(stat.ctr, 0.0);
    }
}

#[test]
fn coverage_and_resolution_over_tickets() {
    let engine = seeded_engine();

    let covered = engine
        .create_ticket(TicketDraft {
            title: "Late parcel".to_string(),
            description: "my delivery is delayed by a week".to_string(),
            customer_name: "Ada".to_string(),
        })
        .unwrap();
    assert!(!covered.recommended_article_ids.is_empty());
    engine
        .update_ticket_status(&covered.id, TicketStatus::Resolved)
        .unwrap();

    let also_covered = engine
        .create_ticket(TicketDraft {
            title: "Refund request".to_string(),
            description: "refund for a damaged item please".to_string(),
            customer_name: "Grace".to_string(),
        })
        .unwrap();
    assert!(!also_covered.recommended_article_ids.is_empty());

    let outcome = engine.run_gap_analysis().unwrap();
    let summary = &outcome.report.summary;
    assert_eq!(summary.total_tickets, 2);
    assert_eq!(summary.tickets_with_recommendations, 2);
    assert_eq!(summary.coverage_percent, 100.0);
    // One of the two recommended tickets concluded.
    assert_eq!(summary.resolution_rate_percent, 50.0);
    // Healthy coverage: no coverage alert.
    assert!(
        outcome
            .alerts_raised
            .iter()
            .all(|a| !a.message.starts_with("Low coverage"))
    );
}

#[test]
fn zero_tickets_yield_zero_coverage_and_an_alert() {
    let engine = seeded_engine();
    let outcome = engine.run_gap_analysis().unwrap();

    assert_eq!(outcome.report.summary.coverage_percent, 0.0);
    assert_eq!(outcome.report.summary.resolution_rate_percent, 0.0);
    assert!(
        outcome
            .alerts_raised
            .iter()
            .any(|a| a.message.starts_with("Low coverage"))
    );
}

#[test]
fn alerts_deliver_through_a_healthy_sink() {
    let sink = Arc::new(MemorySink::new());
    let engine = SupportEngine::in_memory_with_sink(sink.clone());

    let outcome = engine.run_gap_analysis().unwrap();
    assert!(!outcome.alerts_raised.is_empty());
    // Confirmed delivery removes the alerts from the pending set.
    assert!(engine.pending_alerts().is_empty());
    assert!(!sink.delivered().is_empty());
}

#[test]
fn failed_delivery_keeps_alerts_pending_until_flush() {
    let sink = Arc::new(MemorySink::new());
    sink.set_failing(true);
    let engine = SupportEngine::in_memory_with_sink(sink.clone());

    engine.run_gap_analysis().unwrap();
    let pending_before = engine.pending_alerts();
    assert!(!pending_before.is_empty());

    // Sink recovers; the next cycle redelivers the backlog.
    sink.set_failing(false);
    engine.run_gap_analysis().unwrap();
    let delivered = sink.delivered();
    assert!(
        delivered
            .iter()
            .any(|m| pending_before.iter().any(|a| a.message == *m))
    );
}

#[test]
fn operator_can_delete_pending_alerts() {
    let engine = SupportEngine::in_memory();
    engine.trigger_alert("manual check one");
    engine.trigger_alert("manual check two");
    assert_eq!(engine.pending_alerts().len(), 2);

    let removed = engine.delete_alert_at(0).unwrap();
    assert_eq!(removed.message, "manual check one");

    let remaining = engine.pending_alerts();
    assert_eq!(remaining.len(), 1);
    assert_eq!(engine.delete_alerts_by_timestamp(remaining[0].timestamp), 1);
    assert!(engine.pending_alerts().is_empty());
}
