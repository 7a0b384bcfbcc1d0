use std::fs;

use sherpa::cli::commands::Workspace;
use sherpa::document::{ArticleDraft, TicketDraft};

#[test]
fn workspace_round_trips_state_between_processes() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(dir.path());

    // First "process": seed the knowledge base and a ticket.
    {
        let engine = workspace.engine().unwrap();
        engine
            .add_article(ArticleDraft {
                title: "Tracking your order".to_string(),
                content: "information about delivery tracking and dispatch delay".to_string(),
            })
            .unwrap();
        engine
            .create_ticket(TicketDraft {
                title: "Late parcel".to_string(),
                description: "my delivery is delayed by a week".to_string(),
                customer_name: "Ada".to_string(),
            })
            .unwrap();
        workspace.persist(&engine).unwrap();
    }

    // Second "process": everything is back, ids keep counting up.
    {
        let engine = workspace.engine().unwrap();
        assert_eq!(engine.list_articles().unwrap().len(), 1);
        assert_eq!(engine.list_tickets().unwrap().len(), 1);
        assert_eq!(engine.impression_records().unwrap().len(), 1);

        let ticket = engine
            .create_ticket(TicketDraft {
                title: "Another parcel".to_string(),
                description: "tracking says dispatched but nothing arrived".to_string(),
                customer_name: "Grace".to_string(),
            })
            .unwrap();
        assert_eq!(ticket.id, "t_2");
    }
}

#[test]
fn corrupt_data_files_degrade_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("knowledge.json"), "{not valid json").unwrap();
    fs::write(dir.path().join("feedback.json"), "[1, 2, 3]").unwrap();

    let workspace = Workspace::open(dir.path());
    let engine = workspace.engine().unwrap();

    // Degraded to "no history" instead of failing.
    assert!(engine.list_articles().unwrap().is_empty());
    assert!(engine.list_feedback().unwrap().is_empty());
}

#[test]
fn pending_alerts_survive_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(dir.path());

    {
        let engine = workspace.engine().unwrap();
        engine.trigger_alert("coverage degraded overnight");
        workspace.persist(&engine).unwrap();
    }

    {
        let engine = workspace.engine().unwrap();
        let pending = engine.pending_alerts();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].message, "coverage degraded overnight");
    }
}

#[test]
fn gap_reports_accumulate_per_date() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::open(dir.path());

    let engine = workspace.engine().unwrap();
    let outcome = engine.run_gap_analysis().unwrap();
    let date_key = outcome.report.summary.date.format("%Y-%m-%d").to_string();
    workspace.persist_report(&date_key, &outcome.report).unwrap();
    workspace.persist(&engine).unwrap();

    let report_path = dir
        .path()
        .join("reports")
        .join(format!("daily_summary_{date_key}.json"));
    assert!(report_path.exists());

    // A prior date's artifact is never overwritten by a later run.
    let other_path = dir.path().join("reports").join("daily_summary_2000-01-01.json");
    fs::write(&other_path, "{}").unwrap();
    let outcome = engine.run_gap_analysis().unwrap();
    workspace.persist_report(&date_key, &outcome.report).unwrap();
    assert_eq!(fs::read_to_string(&other_path).unwrap(), "{}");
}
