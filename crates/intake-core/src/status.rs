//! # Status Line
//!
//! Every action ends by writing one message to the status line. The kind
//! picks the color the front end uses.
//!
//! ```text
//! ┌──────────────┬───────────┬──────────────────────────────────────────┐
//! │ Action       │ Kind      │ Message                                  │
//! ├──────────────┼───────────┼──────────────────────────────────────────┤
//! │ create       │ Success   │ Customer created successfully            │
//! │ find (hit)   │ Info      │ Customer found                           │
//! │ find (miss)  │ Error     │ Customer not found                       │
//! │ update (hit) │ Success   │ Customer updated successfully            │
//! │ update(miss) │ Error     │ Customer not found for update            │
//! │ export       │ Success   │ PDF generated: <file>                    │
//! │ export(none) │ Error     │ No customers to export                   │
//! │ clear        │ (blank)   │                                          │
//! └──────────────┴───────────┴──────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Something was written (green).
    Success,
    /// Something was read (blue).
    Info,
    /// Nothing matched or nothing to do (red).
    Error,
}

/// One status line message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        StatusMessage {
            kind,
            text: text.into(),
        }
    }

    pub fn created() -> Self {
        StatusMessage::new(StatusKind::Success, "Customer created successfully")
    }

    pub fn found() -> Self {
        StatusMessage::new(StatusKind::Info, "Customer found")
    }

    pub fn not_found() -> Self {
        StatusMessage::new(StatusKind::Error, "Customer not found")
    }

    pub fn updated() -> Self {
        StatusMessage::new(StatusKind::Success, "Customer updated successfully")
    }

    pub fn not_found_for_update() -> Self {
        StatusMessage::new(StatusKind::Error, "Customer not found for update")
    }

    pub fn nothing_to_export() -> Self {
        StatusMessage::new(StatusKind::Error, "No customers to export")
    }

    /// Success message naming the written file.
    pub fn exported(file_name: &str) -> Self {
        StatusMessage::new(StatusKind::Success, format!("PDF generated: {}", file_name))
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kinds() {
        assert_eq!(StatusMessage::created().kind, StatusKind::Success);
        assert_eq!(StatusMessage::found().kind, StatusKind::Info);
        assert!(StatusMessage::not_found().is_error());
        assert!(StatusMessage::not_found_for_update().is_error());
        assert!(StatusMessage::nothing_to_export().is_error());
    }

    #[test]
    fn test_exported_names_file() {
        let msg = StatusMessage::exported("clientes_yangq2025.pdf");
        assert_eq!(msg.to_string(), "PDF generated: clientes_yangq2025.pdf");
        assert!(!msg.is_error());
    }
}
