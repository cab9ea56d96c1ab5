//! # Customer Commands
//!
//! Create, find, update and clear.
//!
//! ## Lookup Flow (find and update)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  form.name ─┐                                                           │
//! │  form.phone ┼─► select_criterion ─► term                                │
//! │  form.address┘        (first non-empty)                                 │
//! │                                                                         │
//! │  SELECT ... WHERE name = term OR phone = term OR address = term LIMIT 1 │
//! │       │                                                                 │
//! │       ├── hit  ─► find:   show record, "Customer found"                 │
//! │       │           update: merge_changes, UPDATE by id, clear form       │
//! │       └── miss ─► form untouched, error status                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::state::DbState;
use intake_core::search::{merge_changes, select_criterion};
use intake_core::timestamp::format_intake_timestamp;
use intake_core::{CustomerForm, FormResponse, StatusMessage};

/// Saves the form as a new record stamped with the local time.
///
/// No field is required. On success the form is cleared.
pub async fn create_customer(db: &DbState, form: CustomerForm) -> AppResult<FormResponse> {
    create_customer_at(db, form, Local::now().naive_local()).await
}

/// [`create_customer`] with an explicit intake time.
pub async fn create_customer_at(
    db: &DbState,
    form: CustomerForm,
    received_at: NaiveDateTime,
) -> AppResult<FormResponse> {
    let new_customer = form.to_new_customer(format_intake_timestamp(received_at));
    let record = db.inner().customers().insert(&new_customer).await?;

    info!(id = record.id, "Customer created");
    Ok(FormResponse::new(CustomerForm::default(), StatusMessage::created()))
}

/// Looks up the first record matching the form's search term.
///
/// A hit replaces every field, timestamp included. A miss leaves the form as
/// the operator typed it.
pub async fn find_customer(db: &DbState, form: CustomerForm) -> AppResult<FormResponse> {
    let criterion = select_criterion(&form);
    if criterion.is_blank() {
        debug!("Name, phone and address are empty, searching for empty values");
    }
    debug!(field = ?criterion.field, "Searching customer");

    let found = db
        .inner()
        .customers()
        .find_first_matching(&criterion.term)
        .await?;

    match found {
        Some(record) => {
            info!(id = record.id, "Customer found");
            Ok(FormResponse::new(
                CustomerForm::from_record(&record),
                StatusMessage::found(),
            ))
        }
        None => {
            info!(field = ?criterion.field, "No customer matched");
            Ok(FormResponse::new(form, StatusMessage::not_found()))
        }
    }
}

/// Overwrites the first matching record with the non-empty form fields.
///
/// Empty fields keep the stored value. The intake timestamp is never
/// touched. On success the form is cleared.
pub async fn update_customer(db: &DbState, form: CustomerForm) -> AppResult<FormResponse> {
    let criterion = select_criterion(&form);
    if criterion.is_blank() {
        debug!("Name, phone and address are empty, updating first record with empty values");
    }
    let repo = db.inner().customers();

    let Some(existing) = repo.find_first_matching(&criterion.term).await? else {
        info!(field = ?criterion.field, "No customer to update");
        return Ok(FormResponse::new(form, StatusMessage::not_found_for_update()));
    };

    let changes = merge_changes(&form, &existing);
    repo.update(existing.id, &changes).await?;

    info!(id = existing.id, "Customer updated");
    Ok(FormResponse::new(CustomerForm::default(), StatusMessage::updated()))
}

/// Empties the form and the status line. Touches no storage.
pub fn clear_form() -> FormResponse {
    FormResponse::cleared()
}
