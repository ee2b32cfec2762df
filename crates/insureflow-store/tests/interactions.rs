use insureflow_core::domain::{InteractionKind, LeadId, LeadStatus, PolicyType};
use insureflow_core::rules::OUTCOME_SENT;
use insureflow_store::error::StoreError;
use insureflow_store::repo::{LeadNew, LogEntry};
use insureflow_store::Store;

fn seeded(status: LeadStatus) -> (Store, LeadId) {
    let store = Store::new();
    let lead = store
        .leads()
        .create(
            1_700_000_000,
            LeadNew {
                name: "Sarah Jenkins".to_string(),
                phone: "512-555-0198".to_string(),
                email: "s.jenkins@example.com".to_string(),
                status,
                policy_interest: PolicyType::WholeLife,
                estimated_commission: 1000.0,
                notes: String::new(),
                next_follow_up: None,
            },
        )
        .expect("create lead");
    let id = lead.id;
    (store, id)
}

fn call(lead_id: LeadId, occurred_at: i64, outcome: &str) -> LogEntry {
    LogEntry {
        lead_id,
        kind: InteractionKind::Call,
        occurred_at,
        outcome: outcome.to_string(),
        note: String::new(),
        duration_secs: Some(180),
    }
}

#[test]
fn log_appends_history_and_stamps_last_contacted() {
    let (store, id) = seeded(LeadStatus::Contacted);
    let when = 1_700_000_500;

    let outcome = store
        .interactions()
        .log(1_700_000_600, call(id, when, "No Answer"), None, None)
        .expect("log");

    assert_eq!(outcome.lead.history.len(), 1);
    assert_eq!(outcome.lead.history[0].id, outcome.interaction.id);
    assert_eq!(outcome.lead.last_contacted, Some(when));
    assert_eq!(outcome.lead.status, LeadStatus::Contacted);
    assert_eq!(outcome.suggested, None);
}

#[test]
fn history_appends_in_order() {
    let (store, id) = seeded(LeadStatus::Contacted);
    for (i, outcome) in ["No Answer", "Left Voicemail", "Spoke with Lead"].iter().enumerate() {
        store
            .interactions()
            .log(1_700_001_000 + i as i64, call(id, 1_700_000_500 + i as i64, outcome), None, None)
            .expect("log");
    }
    let lead = store.leads().get(id).expect("get").expect("exists");
    let outcomes: Vec<&str> = lead.history.iter().map(|i| i.outcome.as_str()).collect();
    assert_eq!(outcomes, ["No Answer", "Left Voicemail", "Spoke with Lead"]);
}

#[test]
fn appointment_set_suggestion_applies_from_any_status() {
    for status in [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Negotiation] {
        let (store, id) = seeded(status);
        let outcome = store
            .interactions()
            .log(1_700_000_600, call(id, 1_700_000_500, "Appointment Set"), None, None)
            .expect("log");
        assert_eq!(outcome.lead.status, LeadStatus::Appointment);
        assert_eq!(outcome.suggested, Some(LeadStatus::Appointment));
    }
}

#[test]
fn spoke_with_lead_only_advances_new_leads() {
    let (store, id) = seeded(LeadStatus::New);
    let outcome = store
        .interactions()
        .log(1_700_000_600, call(id, 1_700_000_500, "Spoke with Lead"), None, None)
        .expect("log");
    assert_eq!(outcome.lead.status, LeadStatus::Contacted);

    let (store, id) = seeded(LeadStatus::Appointment);
    let outcome = store
        .interactions()
        .log(1_700_000_600, call(id, 1_700_000_500, "Spoke with Lead"), None, None)
        .expect("log");
    assert_eq!(outcome.lead.status, LeadStatus::Appointment);
    assert_eq!(outcome.suggested, None);
}

#[test]
fn explicit_status_overrides_suggestion() {
    let (store, id) = seeded(LeadStatus::New);
    let outcome = store
        .interactions()
        .log(
            1_700_000_600,
            call(id, 1_700_000_500, "Appointment Set"),
            Some(LeadStatus::Negotiation),
            Some(1_700_100_000),
        )
        .expect("log");
    assert_eq!(outcome.lead.status, LeadStatus::Negotiation);
    assert_eq!(outcome.suggested, Some(LeadStatus::Appointment));
    assert_eq!(outcome.lead.next_follow_up, Some(1_700_100_000));
}

#[test]
fn log_on_missing_lead_fails_not_found() {
    let store = Store::new();
    let err = store
        .interactions()
        .log(1_700_000_600, call(LeadId::new(), 1_700_000_500, "No Answer"), None, None)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn outreach_advances_new_to_contacted() {
    let (store, id) = seeded(LeadStatus::New);
    let record = store
        .interactions()
        .record_outreach(1_700_000_600, id, InteractionKind::Sms, "Hi Sarah".to_string())
        .expect("record");
    assert!(record.advanced);
    assert_eq!(record.lead.status, LeadStatus::Contacted);
    assert_eq!(record.interaction.outcome, OUTCOME_SENT);
    assert_eq!(record.interaction.kind, InteractionKind::Sms);
    assert_eq!(record.lead.last_contacted, Some(1_700_000_600));
}

#[test]
fn outreach_leaves_other_statuses_alone_but_still_logs() {
    let (store, id) = seeded(LeadStatus::Negotiation);
    let record = store
        .interactions()
        .record_outreach(1_700_000_600, id, InteractionKind::Email, "Quote attached".to_string())
        .expect("record");
    assert!(!record.advanced);
    assert_eq!(record.lead.status, LeadStatus::Negotiation);
    assert_eq!(record.lead.history.len(), 1);
    assert_eq!(record.lead.last_contacted, Some(1_700_000_600));
}

#[test]
fn lost_lead_does_not_touch_revenue_or_pipeline() {
    let (store, id) = seeded(LeadStatus::New);

    let outcome = store
        .interactions()
        .log(1_700_000_600, call(id, 1_700_000_500, "Not Interested"), None, None)
        .expect("log");
    assert_eq!(outcome.lead.status, LeadStatus::ClosedLost);

    assert_eq!(store.analytics().total_closed_revenue(), 0.0);
    assert_eq!(store.analytics().pipeline_value(), 0.0);
}
