//! # Export Command
//!
//! Writes every stored record to the PDF report.
//!
//! ```text
//! list_all ──► empty? ──yes──► "No customers to export" (no file touched)
//!                 │ no
//!                 ▼
//!          layout_report ──► PdfExporter::export ──► "PDF generated: <file>"
//! ```

use tracing::info;

use crate::error::AppResult;
use crate::state::{AppConfig, DbState};
use intake_core::report::layout_report;
use intake_core::{CustomerForm, FormResponse, StatusMessage};

/// Exports all records, in store order, replacing any earlier report.
///
/// The form is handed back unchanged either way.
pub async fn export_customers(
    db: &DbState,
    config: &AppConfig,
    form: CustomerForm,
) -> AppResult<FormResponse> {
    let records = db.inner().customers().list_all().await?;

    if records.is_empty() {
        info!("Export skipped, store is empty");
        return Ok(FormResponse::new(form, StatusMessage::nothing_to_export()));
    }

    let exporter = config.exporter()?;
    let layout = layout_report(&records, &config.report_settings())?;
    exporter.export(&layout)?;

    info!(
        records = records.len(),
        pages = layout.page_count(),
        "Customers exported"
    );
    Ok(FormResponse::new(
        form,
        StatusMessage::exported(exporter.file_name()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_customer;
    use intake_core::StatusKind;
    use intake_db::DbConfig;
    use std::fs;

    async fn setup() -> (DbState, AppConfig, tempfile::TempDir) {
        let db = DbState::open(DbConfig::in_memory()).await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.export.directory = dir.path().to_path_buf();
        (db, config, dir)
    }

    fn customer(i: usize) -> CustomerForm {
        CustomerForm {
            name: format!("Customer {}", i),
            phone: format!("555-{:04}", i),
            brand: "Acme".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_store_writes_nothing() {
        let (db, config, dir) = setup().await;

        let response = export_customers(&db, &config, CustomerForm::default())
            .await
            .unwrap();

        assert_eq!(response.status, Some(StatusMessage::nothing_to_export()));
        assert!(!dir.path().join("clientes_yangq2025.pdf").exists());
    }

    #[tokio::test]
    async fn test_empty_store_leaves_old_file() {
        let (db, config, dir) = setup().await;
        let target = dir.path().join("clientes_yangq2025.pdf");
        fs::write(&target, b"previous").unwrap();

        export_customers(&db, &config, CustomerForm::default())
            .await
            .unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"previous");
    }

    #[tokio::test]
    async fn test_export_writes_pdf_and_keeps_form() {
        let (db, config, dir) = setup().await;
        for i in 1..=3 {
            create_customer(&db, customer(i)).await.unwrap();
        }

        let typed = CustomerForm {
            name: "half typed".to_string(),
            ..Default::default()
        };
        let response = export_customers(&db, &config, typed.clone()).await.unwrap();

        assert_eq!(response.form, typed);
        let status = response.status.unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "PDF generated: clientes_yangq2025.pdf");

        let bytes = fs::read(dir.path().join("clientes_yangq2025.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_custom_file_name() {
        let (db, mut config, dir) = setup().await;
        config.export.file_name = "taller.pdf".to_string();
        create_customer(&db, customer(1)).await.unwrap();

        let response = export_customers(&db, &config, CustomerForm::default())
            .await
            .unwrap();

        assert_eq!(response.status, Some(StatusMessage::exported("taller.pdf")));
        assert!(dir.path().join("taller.pdf").exists());
    }
}
