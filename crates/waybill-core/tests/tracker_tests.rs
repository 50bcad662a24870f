mod common;

use waybill_core::{
    params::{CreateItem, CreateParty, Id, ResetFollowUp, SetStepConfig, SubmitStep},
    DelayStatus, PendingStep, Responses, ResetScope, TrackerBuilder,
};

fn responses(pairs: &[(&str, &str)]) -> Responses {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

#[tokio::test]
async fn test_complete_follow_up_workflow() {
    let (_temp_dir, tracker) = common::create_test_tracker().await;

    // Configure a couple of steps before any item exists.
    tracker
        .set_step_config(&SetStepConfig {
            step: 1,
            doer: Some("Sales Desk".to_string()),
            tat_value: 4,
            tat_unit: "hours".to_string(),
        })
        .await
        .expect("Failed to configure step 1");
    tracker
        .set_step_config(&SetStepConfig {
            step: 3,
            doer: Some("Production Head".to_string()),
            tat_value: 2,
            tat_unit: "days".to_string(),
        })
        .await
        .expect("Failed to configure step 3");

    let party = tracker
        .create_party(&CreateParty {
            name: "Sharma Traders".to_string(),
            contact: Some("98200 00000".to_string()),
        })
        .await
        .expect("Failed to create party");

    let item = tracker
        .create_item(&CreateItem {
            party_id: party.id,
            item: "Gasket".to_string(),
            qty: 12,
        })
        .await
        .expect("Failed to create item");
    assert!(item.step(1).planned.is_some());

    // Walk the full out-station path: no step is skipped except none.
    let steps: [(u8, Vec<(&str, &str)>); 8] = [
        (1, vec![("Destination", "Out Station")]),
        (2, vec![("Stock Availability", "Not Available")]),
        (3, vec![("Production Details", "Batch 42")]),
        (4, vec![("Packing Details", "3 crates")]),
        (5, vec![("Transporter", "Highway Carriers")]),
        (6, vec![("LR Number", "LR-2231"), ("Vehicle Number", "MH-04-1234")]),
        (7, vec![("Bill Number", "INV-88"), ("Cost Per Unit", "20"), ("Total Cost", "999")]),
        (8, vec![("Filing Reference", "File 7-A")]),
    ];

    for (step, pairs) in steps {
        tracker
            .submit_step(&SubmitStep {
                item_id: item.id,
                step,
                responses: responses(&pairs),
            })
            .await
            .unwrap_or_else(|e| panic!("Failed to submit step {step}: {e}"));
    }

    let finished = tracker
        .get_item(&Id { id: item.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        tracker.pending_step(&Id { id: item.id }).await.unwrap(),
        PendingStep::Complete
    );
    // An explicitly supplied total wins over the derived value.
    assert_eq!(
        finished
            .step(7)
            .responses
            .get("Total Cost")
            .map(String::as_str),
        Some("999")
    );

    // Every completed step reports a concrete delay classification.
    let report = tracker.item_report(&Id { id: item.id }).await.unwrap();
    assert_eq!(report.pending, PendingStep::Complete);
    for entry in &report.steps {
        assert!(!entry.skipped);
        assert_ne!(entry.delay.status, DelayStatus::NoTarget);
    }
}

#[tokio::test]
async fn test_reset_then_replay_with_different_answers() {
    let (_temp_dir, tracker) = common::create_test_tracker().await;

    let party = tracker
        .create_party(&CreateParty {
            name: "Mehta & Sons".to_string(),
            contact: None,
        })
        .await
        .unwrap();
    let item = tracker
        .create_item(&CreateItem {
            party_id: party.id,
            item: "Valve".to_string(),
            qty: 5,
        })
        .await
        .unwrap();

    tracker
        .submit_step(&SubmitStep {
            item_id: item.id,
            step: 1,
            responses: responses(&[("Destination", "Out Station")]),
        })
        .await
        .unwrap();
    tracker
        .submit_step(&SubmitStep {
            item_id: item.id,
            step: 2,
            responses: responses(&[("Stock Availability", "Not Available")]),
        })
        .await
        .unwrap();
    assert_eq!(
        tracker.pending_step(&Id { id: item.id }).await.unwrap(),
        PendingStep::Step(3)
    );

    // Correct the stock answer: reset from step 2 and resubmit.
    tracker
        .reset_follow_up(&ResetFollowUp {
            item_id: item.id,
            scope: ResetScope::FromStep(2),
        })
        .await
        .unwrap();
    tracker
        .submit_step(&SubmitStep {
            item_id: item.id,
            step: 2,
            responses: responses(&[("Stock Availability", "Stock Available")]),
        })
        .await
        .unwrap();

    // Production is now skipped; the pipeline continues at Packing.
    assert_eq!(
        tracker.pending_step(&Id { id: item.id }).await.unwrap(),
        PendingStep::Step(4)
    );
}

#[tokio::test]
async fn test_tracker_instances_share_database() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("shared.db");

    let first = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build tracker");
    let party = first
        .create_party(&CreateParty {
            name: "Shared Party".to_string(),
            contact: None,
        })
        .await
        .unwrap();

    let second = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build second tracker");
    let found = second
        .get_party(&Id { id: party.id })
        .await
        .unwrap()
        .expect("Party should be visible to the second instance");
    assert_eq!(found.name, "Shared Party");
}
