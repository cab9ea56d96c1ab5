//! # Domain Types
//!
//! The customer intake record and the form that edits it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ CustomerRecord   │   │  CustomerForm    │   │  FormResponse    │    │
//! │  │ ──────────────── │   │ ──────────────── │   │ ──────────────── │    │
//! │  │ id (store)       │   │ 7 editable text  │   │ form after the   │    │
//! │  │ 7 text fields    │◄──│ fields + read-   │──►│ action + status  │    │
//! │  │ intake_timestamp │   │ only timestamp   │   │ line message     │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  NewCustomer      - values for an INSERT (timestamp already stamped)    │
//! │  CustomerChanges  - values for an UPDATE (never the timestamp)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store exactly once. `intake_timestamp` is written
//! on insert and never again. Nothing else is unique or required.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::status::StatusMessage;

// =============================================================================
// Customer Record
// =============================================================================

/// A stored customer repair intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    /// Store-assigned identifier.
    pub id: i64,

    /// Customer name. First choice as a search term.
    pub name: String,

    /// Contact phone. Second choice as a search term.
    pub phone: String,

    /// Customer address. Third choice as a search term.
    pub address: String,

    /// Device brand.
    pub brand: String,

    /// Device model.
    pub model: String,

    /// Reported fault.
    pub fault: String,

    /// Free-form technician note, possibly several lines.
    pub note: String,

    /// When the device was received (`YYYY-MM-DD HH:MM:SS`).
    pub intake_timestamp: String,
}

// =============================================================================
// Insert / Update Payloads
// =============================================================================

/// Values for a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub brand: String,
    pub model: String,
    pub fault: String,
    pub note: String,
    pub intake_timestamp: String,
}

/// New values for the mutable fields of an existing record.
///
/// There is deliberately no timestamp here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerChanges {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub brand: String,
    pub model: String,
    pub fault: String,
    pub note: String,
}

// =============================================================================
// Form
// =============================================================================

/// The intake form as the operator sees it.
///
/// Every operation takes the current form as its request and hands back the
/// form it should show next (see [`FormResponse`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub brand: String,
    pub model: String,
    pub fault: String,
    /// Multi-line input. Surrounding whitespace is dropped when saved.
    pub note: String,
    /// Read-only display, filled in by a successful find.
    pub intake_timestamp: String,
}

impl CustomerForm {
    /// Builds a form showing every field of a stored record.
    pub fn from_record(record: &CustomerRecord) -> Self {
        CustomerForm {
            name: record.name.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            brand: record.brand.clone(),
            model: record.model.clone(),
            fault: record.fault.clone(),
            note: record.note.clone(),
            intake_timestamp: record.intake_timestamp.clone(),
        }
    }

    /// Empties every field, the timestamp display included.
    pub fn clear(&mut self) {
        *self = CustomerForm::default();
    }

    /// True when no field holds any text.
    pub fn is_blank(&self) -> bool {
        *self == CustomerForm::default()
    }

    /// The note as it gets stored: trimmed at both ends, inner lines kept.
    pub fn trimmed_note(&self) -> &str {
        self.note.trim()
    }

    /// Turns the form into an insert payload stamped with `intake_timestamp`.
    ///
    /// The timestamp display on the form is ignored.
    pub fn to_new_customer(&self, intake_timestamp: impl Into<String>) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            fault: self.fault.clone(),
            note: self.trimmed_note().to_string(),
            intake_timestamp: intake_timestamp.into(),
        }
    }

    /// Reads one editable field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::Brand => &self.brand,
            FormField::Model => &self.model,
            FormField::Fault => &self.fault,
            FormField::Note => &self.note,
        }
    }

    /// Overwrites one editable field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Address => self.address = value,
            FormField::Brand => self.brand = value,
            FormField::Model => self.model = value,
            FormField::Fault => self.fault = value,
            FormField::Note => self.note = value,
        }
    }
}

/// The seven editable inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Phone,
    Address,
    Brand,
    Model,
    Fault,
    Note,
}

impl FormField {
    /// All editable fields in display order.
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Phone,
        FormField::Address,
        FormField::Brand,
        FormField::Model,
        FormField::Fault,
        FormField::Note,
    ];

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Phone => "Phone",
            FormField::Address => "Address",
            FormField::Brand => "Device brand",
            FormField::Model => "Model",
            FormField::Fault => "Fault",
            FormField::Note => "Note",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Address => "address",
            FormField::Brand => "brand",
            FormField::Model => "model",
            FormField::Fault => "fault",
            FormField::Note => "note",
        };
        f.write_str(name)
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "phone" | "telephone" => Ok(FormField::Phone),
            "address" => Ok(FormField::Address),
            "brand" => Ok(FormField::Brand),
            "model" => Ok(FormField::Model),
            "fault" | "problem" => Ok(FormField::Fault),
            "note" | "notes" => Ok(FormField::Note),
            other => Err(ValidationError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Form Response
// =============================================================================

/// What an operation hands back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    /// The form to display after the action.
    pub form: CustomerForm,

    /// Status line. `None` means the line is blank.
    pub status: Option<StatusMessage>,
}

impl FormResponse {
    /// Creates a response with a status message.
    pub fn new(form: CustomerForm, status: StatusMessage) -> Self {
        FormResponse {
            form,
            status: Some(status),
        }
    }

    /// An empty form and a blank status line.
    pub fn cleared() -> Self {
        FormResponse {
            form: CustomerForm::default(),
            status: None,
        }
    }

    /// True unless the status line reports an error.
    pub fn is_success(&self) -> bool {
        self.status.as_ref().map_or(true, |s| !s.is_error())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
