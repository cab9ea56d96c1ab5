//! End-to-end runs of the five form commands against a file-backed store.

use std::fs;
use std::path::Path;

use intake_cli::commands::{
    clear_form, create_customer, export_customers, find_customer, update_customer,
};
use intake_cli::state::{AppConfig, DbState};
use intake_core::report::{layout_report, record_lines};
use intake_core::timestamp::parse_intake_timestamp;
use intake_core::{CustomerForm, StatusKind, StatusMessage};

fn config_in(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.path = dir.join("clientes.db");
    config.export.directory = dir.to_path_buf();
    config
}

fn ana() -> CustomerForm {
    CustomerForm {
        name: "Ana".to_string(),
        phone: "555".to_string(),
        address: "X".to_string(),
        brand: "Acme".to_string(),
        model: "M1".to_string(),
        fault: "no enciende".to_string(),
        note: "revisar fuente".to_string(),
        ..Default::default()
    }
}

fn search(name: &str, phone: &str, address: &str) -> CustomerForm {
    CustomerForm {
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_then_find_by_each_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let db = DbState::open(config.db_config()).await.unwrap();

    let created = create_customer(&db, ana()).await.unwrap();
    assert_eq!(created.status, Some(StatusMessage::created()));

    for form in [search("Ana", "", ""), search("", "555", ""), search("", "", "X")] {
        let response = find_customer(&db, form).await.unwrap();
        assert_eq!(response.status, Some(StatusMessage::found()));

        let found = response.form;
        assert_eq!(found.name, "Ana");
        assert_eq!(found.phone, "555");
        assert_eq!(found.address, "X");
        assert_eq!(found.brand, "Acme");
        assert_eq!(found.model, "M1");
        assert_eq!(found.fault, "no enciende");
        assert_eq!(found.note, "revisar fuente");
        assert!(parse_intake_timestamp(&found.intake_timestamp).is_ok());
    }

    db.close().await;
}

#[tokio::test]
async fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let db = DbState::open(config.db_config()).await.unwrap();
    create_customer(&db, ana()).await.unwrap();
    db.close().await;

    let db = DbState::open(config.db_config()).await.unwrap();
    let response = find_customer(&db, search("", "555", "")).await.unwrap();
    assert_eq!(response.form.name, "Ana");
    db.close().await;
}

#[tokio::test]
async fn update_falls_back_to_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let db = DbState::open(config.db_config()).await.unwrap();
    create_customer(&db, ana()).await.unwrap();

    let before = find_customer(&db, search("Ana", "", "")).await.unwrap().form;

    let changes = CustomerForm {
        name: "Ana".to_string(),
        model: "M2".to_string(),
        note: "  cambiar pantalla  ".to_string(),
        ..Default::default()
    };
    let response = update_customer(&db, changes).await.unwrap();
    assert_eq!(response.status, Some(StatusMessage::updated()));
    assert!(response.form.is_blank());

    let after = find_customer(&db, search("Ana", "", "")).await.unwrap().form;
    assert_eq!(after.model, "M2");
    assert_eq!(after.note, "cambiar pantalla");
    assert_eq!(after.phone, "555");
    assert_eq!(after.brand, "Acme");
    assert_eq!(after.fault, "no enciende");
    assert_eq!(after.intake_timestamp, before.intake_timestamp);

    db.close().await;
}

#[tokio::test]
async fn misses_change_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let db = DbState::open(config.db_config()).await.unwrap();
    create_customer(&db, ana()).await.unwrap();

    let typed = search("Luis", "", "");
    let found = find_customer(&db, typed.clone()).await.unwrap();
    assert_eq!(found.form, typed);
    assert_eq!(found.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));

    let mut update = typed.clone();
    update.fault = "sin sonido".to_string();
    let updated = update_customer(&db, update.clone()).await.unwrap();
    assert_eq!(updated.form, update);
    assert_eq!(updated.status, Some(StatusMessage::not_found_for_update()));

    let stored = db.inner().customers().list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fault, "no enciende");

    db.close().await;
}

#[tokio::test]
async fn empty_export_leaves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let db = DbState::open(config.db_config()).await.unwrap();

    let target = dir.path().join("clientes_yangq2025.pdf");
    let first = export_customers(&db, &config, CustomerForm::default()).await.unwrap();
    assert_eq!(first.status, Some(StatusMessage::nothing_to_export()));
    assert!(!target.exists());

    fs::write(&target, b"old report").unwrap();
    export_customers(&db, &config, CustomerForm::default()).await.unwrap();
    assert_eq!(fs::read(&target).unwrap(), b"old report");

    db.close().await;
}

#[tokio::test]
async fn export_pages_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let db = DbState::open(config.db_config()).await.unwrap();

    for i in 1..=25 {
        let mut form = ana();
        form.name = format!("Cliente {}", i);
        form.phone = format!("555-{:04}", i);
        create_customer(&db, form).await.unwrap();
    }

    let response = export_customers(&db, &config, CustomerForm::default()).await.unwrap();
    assert_eq!(
        response.status,
        Some(StatusMessage::exported("clientes_yangq2025.pdf"))
    );
    let bytes = fs::read(dir.path().join("clientes_yangq2025.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    // The written document follows this layout.
    let records = db.inner().customers().list_all().await.unwrap();
    let layout = layout_report(&records, &config.report_settings()).unwrap();
    assert!(layout.page_count() >= 3);
    assert_eq!(layout.record_count, 25);

    let texts: Vec<&str> = layout.lines().map(|l| l.text.as_str()).collect();
    for record in &records {
        for line in record_lines(record) {
            assert!(texts.contains(&line.as_str()), "missing line {:?}", line);
        }
    }
    for line in layout.lines() {
        assert!(line.y >= config.report_settings().bottom_margin);
    }

    db.close().await;
}

#[test]
fn clear_empties_everything() {
    let response = clear_form();
    assert_eq!(response.form, CustomerForm::default());
    assert_eq!(response.status, None);
}
