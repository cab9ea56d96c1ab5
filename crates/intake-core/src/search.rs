//! # Lookup and Update Rules
//!
//! Find and update both locate a record from the form the same way.
//!
//! ## Criterion Selection
//! ```text
//! name non-empty?    ──yes──► term = name
//!      │ no
//! phone non-empty?   ──yes──► term = phone
//!      │ no
//! address non-empty? ──yes──► term = address
//!      │ no
//!      └────────────────────► term = ""
//! ```
//!
//! Only ONE value is used, and the store compares it against all three
//! columns: `name = term OR phone = term OR address = term`. A phone number
//! typed into the form will therefore also match a record whose *name* is
//! that number. This loose matching is intentional and must stay.
//!
//! ## Update Merge
//! An empty form field keeps the stored value; a non-empty one replaces it.
//! The intake timestamp is not part of the merge at all.

use crate::types::{CustomerChanges, CustomerForm, CustomerRecord};

/// The form field a search term was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Address,
    /// All three were empty; the empty string is searched.
    Blank,
}

/// The single term used by find and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriterion {
    pub field: SearchField,
    pub term: String,
}

impl SearchCriterion {
    /// True when the term came from no field at all.
    pub fn is_blank(&self) -> bool {
        self.field == SearchField::Blank
    }
}

/// Picks the first non-empty of name, phone, address.
///
/// Values are used exactly as typed. A field holding only spaces counts as
/// non-empty.
pub fn select_criterion(form: &CustomerForm) -> SearchCriterion {
    let candidates = [
        (SearchField::Name, &form.name),
        (SearchField::Phone, &form.phone),
        (SearchField::Address, &form.address),
    ];

    candidates
        .into_iter()
        .find(|(_, value)| !value.is_empty())
        .map(|(field, value)| SearchCriterion {
            field,
            term: value.clone(),
        })
        .unwrap_or(SearchCriterion {
            field: SearchField::Blank,
            term: String::new(),
        })
}

/// Form value if non-empty, otherwise the stored value.
fn keep_or_replace(form_value: &str, stored: &str) -> String {
    if form_value.is_empty() {
        stored.to_string()
    } else {
        form_value.to_string()
    }
}

/// Computes the values an update writes.
pub fn merge_changes(form: &CustomerForm, existing: &CustomerRecord) -> CustomerChanges {
    CustomerChanges {
        name: keep_or_replace(&form.name, &existing.name),
        phone: keep_or_replace(&form.phone, &existing.phone),
        address: keep_or_replace(&form.address, &existing.address),
        brand: keep_or_replace(&form.brand, &existing.brand),
        model: keep_or_replace(&form.model, &existing.model),
        fault: keep_or_replace(&form.fault, &existing.fault),
        note: keep_or_replace(form.trimmed_note(), &existing.note),
    }
}
