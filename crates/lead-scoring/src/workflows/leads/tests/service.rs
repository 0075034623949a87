use super::common::*;
use std::io::Cursor;

use crate::workflows::leads::domain::IntentLabel;
use crate::workflows::leads::service::ScoringError;
use crate::workflows::leads::store::WorkspaceStore;

#[tokio::test]
async fn unreachable_classifier_scores_reference_lead_high() {
    let harness = harness(ScriptedClassifier::failing(), 20);
    harness.service.save_offer(offer()).expect("offer saved");
    harness.store.replace_leads(vec![jane()]).expect("leads stored");

    let results = harness.service.score().await.expect("scoring succeeds");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Jane");
    assert_eq!(results[0].score, 80);
    assert_eq!(results[0].intent, IntentLabel::High);
    assert_eq!(results[0].reasoning, "Rule: 50 + AI: 30");
}

#[tokio::test]
async fn classifier_signal_is_added_to_rule_score() {
    let harness = harness(
        ScriptedClassifier::new(vec![Reply::Text("1. High\n2. Low".to_string())]),
        20,
    );
    harness.service.save_offer(offer()).expect("offer saved");
    let count = harness
        .service
        .upload_leads(Cursor::new(LEADS_CSV))
        .expect("upload succeeds");
    assert_eq!(count, 2);

    let results = harness.service.score().await.expect("scoring succeeds");

    assert_eq!(results[0].score, 100);
    assert_eq!(results[0].reasoning, "Rule: 50 + AI: 50");
    // Raj: analyst (0) + retail vs SaaS (0) + complete (10), classifier low (10).
    assert_eq!(results[1].name, "Raj");
    assert_eq!(results[1].score, 20);
    assert_eq!(results[1].intent, IntentLabel::Low);
}

#[tokio::test]
async fn scoring_without_offer_is_rejected() {
    let harness = harness(ScriptedClassifier::failing(), 20);
    harness
        .service
        .upload_leads(Cursor::new(LEADS_CSV))
        .expect("upload succeeds");

    let error = harness.service.score().await.expect_err("offer required");

    assert!(matches!(error, ScoringError::NoOffer));
    assert!(harness.classifier.requests().is_empty());
}

#[tokio::test]
async fn malformed_upload_keeps_previous_leads() {
    let harness = harness(ScriptedClassifier::failing(), 20);
    harness
        .service
        .upload_leads(Cursor::new(LEADS_CSV))
        .expect("first upload succeeds");

    let error = harness
        .service
        .upload_leads(Cursor::new("header\nOnly,three,columns\n"))
        .expect_err("short row rejected");

    assert!(matches!(error, ScoringError::Import(_)));
    let snapshot = harness.store.snapshot().expect("snapshot");
    assert_eq!(snapshot.leads.len(), 2);
}

#[tokio::test]
async fn export_before_scoring_triggers_scoring() {
    let harness = harness(ScriptedClassifier::failing(), 20);
    harness.service.save_offer(offer()).expect("offer saved");
    harness.store.replace_leads(vec![jane()]).expect("leads stored");

    let csv = harness.service.export_csv().await.expect("export succeeds");

    assert_eq!(harness.classifier.requests().len(), 1);
    assert_eq!(
        csv,
        "Name,Role,Company,Score,Intent,Reasoning\n\"Jane\",\"VP Sales\",\"Acme\",80,\"High\",\"Rule: 50 + AI: 30\"\n"
    );
}

#[tokio::test]
async fn export_of_empty_lead_set_is_header_only() {
    let harness = harness(ScriptedClassifier::failing(), 20);

    let csv = harness.service.export_csv().await.expect("export succeeds");

    assert_eq!(csv, "Name,Role,Company,Score,Intent,Reasoning\n");
    assert!(harness.classifier.requests().is_empty());
}

#[tokio::test]
async fn export_reuses_cached_results() {
    let harness = harness(ScriptedClassifier::failing(), 20);
    harness.service.save_offer(offer()).expect("offer saved");
    harness.store.replace_leads(vec![jane()]).expect("leads stored");

    harness.service.score().await.expect("scoring succeeds");
    harness.service.export_csv().await.expect("export succeeds");

    assert_eq!(harness.classifier.requests().len(), 1);
}

#[tokio::test]
async fn export_rescoring_after_leads_change() {
    let harness = harness(ScriptedClassifier::failing(), 20);
    harness.service.save_offer(offer()).expect("offer saved");
    harness.store.replace_leads(vec![jane()]).expect("leads stored");
    harness.service.score().await.expect("scoring succeeds");

    harness
        .service
        .upload_leads(Cursor::new(LEADS_CSV))
        .expect("upload succeeds");
    let csv = harness.service.export_csv().await.expect("export succeeds");

    assert_eq!(harness.classifier.requests().len(), 2);
    assert!(csv.contains("\"Raj\""));
}

#[tokio::test]
async fn results_follow_input_order_across_batches() {
    let harness = harness(ScriptedClassifier::failing(), 3);
    harness.service.save_offer(offer()).expect("offer saved");
    let leads = numbered_leads(7);
    harness.store.replace_leads(leads.clone()).expect("leads stored");

    let results = harness.service.score().await.expect("scoring succeeds");

    let names: Vec<_> = results.iter().map(|result| result.name.clone()).collect();
    let expected: Vec<_> = leads.iter().map(|lead| lead.name.clone()).collect();
    assert_eq!(names, expected);
    assert_eq!(harness.classifier.requests().len(), 3);
    assert_eq!(harness.pacer.pauses(), 2);
    assert!(results.iter().all(|result| result.reasoning.ends_with("AI: 30")));
}
