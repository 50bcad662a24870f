use jiff::Timestamp;
use tempfile::NamedTempFile;
use waybill_core::{Database, ItemPatch, Responses, TatUnit, TrackerError};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Database should be initialized and ready to use
    // This test passes if no panic occurs during creation
    assert!(_temp_file.path().exists());
}

#[test]
fn test_create_party() {
    let (_temp_file, mut db) = create_test_db();

    let party = db
        .create_party("Sharma Traders", Some("98200 00000"))
        .expect("Failed to create party");

    assert_eq!(party.name, "Sharma Traders");
    assert_eq!(party.contact, Some("98200 00000".to_string()));
    assert!(party.id > 0);
}

#[test]
fn test_get_party() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_party("Mehta & Sons", None)
        .expect("Failed to create party");

    let retrieved = db
        .get_party(created.id)
        .expect("Failed to get party")
        .expect("Party should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "Mehta & Sons");
    assert_eq!(retrieved.contact, None);

    assert!(db.get_party(999).expect("Query should succeed").is_none());
}

#[test]
fn test_list_parties() {
    let (_temp_file, mut db) = create_test_db();

    db.create_party("Party 1", None).expect("Failed to create");
    db.create_party("Party 2", None).expect("Failed to create");
    db.create_party("Party 3", None).expect("Failed to create");

    let parties = db.list_parties().expect("Failed to list parties");
    assert_eq!(parties.len(), 3);
}

#[test]
fn test_create_item_seeds_step_rows() {
    let (_temp_file, mut db) = create_test_db();

    let party = db.create_party("Party", None).expect("Failed to create");
    let planned = Timestamp::now();
    let item = db
        .create_item(party.id, "Gasket", 10, planned)
        .expect("Failed to create item");

    assert_eq!(item.party_id, party.id);
    assert_eq!(item.qty, 10);
    assert!(!item.cancelled);
    assert_eq!(item.step(1).planned, Some(planned));

    // The stored form matches the returned form.
    let stored = db
        .get_item(item.id)
        .expect("Failed to get item")
        .expect("Item should exist");
    assert_eq!(stored.step(1).planned, Some(planned));
    for step in 2..=8 {
        assert!(stored.step(step).planned.is_none());
        assert!(stored.step(step).actual.is_none());
        assert!(stored.step(step).responses.is_empty());
    }
}

#[test]
fn test_create_item_unknown_party() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_item(42, "Gasket", 1, Timestamp::now());
    assert!(matches!(result, Err(TrackerError::PartyNotFound { id: 42 })));
}

#[test]
fn test_get_party_items() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.create_party("First", None).expect("Failed to create");
    let second = db.create_party("Second", None).expect("Failed to create");
    db.create_item(first.id, "Gasket", 1, Timestamp::now())
        .expect("Failed to create item");
    db.create_item(first.id, "Flange", 2, Timestamp::now())
        .expect("Failed to create item");
    db.create_item(second.id, "Valve", 3, Timestamp::now())
        .expect("Failed to create item");

    assert_eq!(db.get_party_items(first.id).unwrap().len(), 2);
    assert_eq!(db.get_party_items(second.id).unwrap().len(), 1);
    assert_eq!(db.get_items().unwrap().len(), 3);
}

#[test]
fn test_apply_patch_sets_and_clears_fields() {
    let (_temp_file, mut db) = create_test_db();

    let party = db.create_party("Party", None).expect("Failed to create");
    let item = db
        .create_item(party.id, "Gasket", 10, Timestamp::now())
        .expect("Failed to create item");

    let ts = Timestamp::now();
    let mut responses = Responses::new();
    responses.insert("Destination".to_string(), "Local".to_string());

    let mut patch = ItemPatch::default();
    patch.step_mut(1).actual = Some(Some(ts));
    patch.step_mut(1).responses = Some(responses);
    patch.step_mut(2).planned = Some(Some(ts));
    db.apply_patch(item.id, &patch).expect("Failed to apply patch");

    let stored = db.get_item(item.id).unwrap().unwrap();
    assert_eq!(stored.step(1).actual, Some(ts));
    assert_eq!(
        stored.step(1).responses.get("Destination").map(String::as_str),
        Some("Local")
    );
    assert_eq!(stored.step(2).planned, Some(ts));
    assert!(stored.updated_at >= item.updated_at);

    // Clearing uses the same path with Some(None) / empty responses.
    let mut clear = ItemPatch::default();
    clear.step_mut(1).actual = Some(None);
    clear.step_mut(1).responses = Some(Responses::new());
    db.apply_patch(item.id, &clear).expect("Failed to clear");

    let cleared = db.get_item(item.id).unwrap().unwrap();
    assert!(cleared.step(1).actual.is_none());
    assert!(cleared.step(1).responses.is_empty());
    // Untouched fields keep their values.
    assert_eq!(cleared.step(2).planned, Some(ts));
}

#[test]
fn test_apply_patch_cancelled_flag() {
    let (_temp_file, mut db) = create_test_db();

    let party = db.create_party("Party", None).expect("Failed to create");
    let item = db
        .create_item(party.id, "Gasket", 10, Timestamp::now())
        .expect("Failed to create item");

    let patch = ItemPatch {
        steps: Default::default(),
        cancelled: Some(true),
    };
    db.apply_patch(item.id, &patch).expect("Failed to cancel");
    assert!(db.get_item(item.id).unwrap().unwrap().cancelled);
}

#[test]
fn test_apply_patch_unknown_item() {
    let (_temp_file, mut db) = create_test_db();

    let mut patch = ItemPatch::default();
    patch.step_mut(1).actual = Some(Some(Timestamp::now()));

    let result = db.apply_patch(77, &patch);
    assert!(matches!(result, Err(TrackerError::ItemNotFound { id: 77 })));
}

#[test]
fn test_apply_empty_patch_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    let party = db.create_party("Party", None).expect("Failed to create");
    let item = db
        .create_item(party.id, "Gasket", 10, Timestamp::now())
        .expect("Failed to create item");

    db.apply_patch(item.id, &ItemPatch::default())
        .expect("Empty patch should succeed");

    let stored = db.get_item(item.id).unwrap().unwrap();
    assert_eq!(stored.updated_at, item.updated_at);
}

#[test]
fn test_step_config_upsert_and_fetch() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.get_step_configs().unwrap().is_empty());

    let config = waybill_core::StepConfig {
        step: 4,
        doer: Some("Packing Head".to_string()),
        tat_value: 6,
        tat_unit: TatUnit::Hours,
    };
    db.upsert_step_config(&config).expect("Failed to upsert");

    let replacement = waybill_core::StepConfig {
        step: 4,
        doer: None,
        tat_value: 1,
        tat_unit: TatUnit::Days,
    };
    db.upsert_step_config(&replacement).expect("Failed to replace");

    let rows = db.get_step_configs().expect("Failed to fetch");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], replacement);
}

#[test]
fn test_data_survives_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    let item_id = {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        let party = db.create_party("Party", None).expect("Failed to create");
        db.create_item(party.id, "Gasket", 10, Timestamp::now())
            .expect("Failed to create item")
            .id
    };

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let item = db
        .get_item(item_id)
        .expect("Failed to get item")
        .expect("Item should survive reopen");
    assert_eq!(item.item, "Gasket");
}
