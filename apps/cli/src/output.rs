//! Terminal rendering of the form and its status line.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

use intake_core::{CustomerForm, FormField, FormResponse, StatusKind, StatusMessage};

const LABEL_WIDTH: usize = 13;
const TIMESTAMP_LABEL: &str = "Intake date";

/// Status text in its color: green success, blue info, red error.
pub fn status_line(status: &StatusMessage) -> ColoredString {
    match status.kind {
        StatusKind::Success => status.text.as_str().green(),
        StatusKind::Info => status.text.as_str().blue(),
        StatusKind::Error => status.text.as_str().red(),
    }
}

/// Writes every field, one per line. Extra note lines are indented under
/// the first.
pub fn write_form(out: &mut impl Write, form: &CustomerForm) -> io::Result<()> {
    for field in FormField::ALL {
        let mut lines = form.field(field).lines();
        let first = lines.next().unwrap_or("");
        writeln!(out, "{:<width$} {}", format!("{}:", field.label()), first, width = LABEL_WIDTH)?;
        for rest in lines {
            writeln!(out, "{:<width$} {}", "", rest, width = LABEL_WIDTH)?;
        }
    }

    writeln!(
        out,
        "{:<width$} {}",
        format!("{}:", TIMESTAMP_LABEL),
        form.intake_timestamp.as_str().dimmed(),
        width = LABEL_WIDTH
    )
}

/// Prints a command response.
///
/// A record shown by find is printed in full. Other outcomes print only the
/// status line.
pub fn write_response(out: &mut impl Write, response: &FormResponse, json: bool) -> io::Result<()> {
    if json {
        let body = serde_json::to_string_pretty(response).map_err(io::Error::other)?;
        return writeln!(out, "{}", body);
    }

    if !response.form.intake_timestamp.is_empty() {
        write_form(out, &response.form)?;
        writeln!(out)?;
    }

    match &response.status {
        Some(status) => writeln!(out, "{}", status_line(status)),
        None => writeln!(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(response: &FormResponse, json: bool) -> String {
        let mut out = Vec::new();
        write_response(&mut out, response, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_status_only() {
        let text = render(
            &FormResponse::new(CustomerForm::default(), StatusMessage::created()),
            false,
        );
        assert!(text.contains("Customer created successfully"));
        assert!(!text.contains("Name:"));
    }

    #[test]
    fn test_found_record_is_printed() {
        let form = CustomerForm {
            name: "Ana".to_string(),
            note: "uno\ndos".to_string(),
            intake_timestamp: "2025-03-01 10:15:00".to_string(),
            ..Default::default()
        };
        let text = render(&FormResponse::new(form, StatusMessage::found()), false);

        assert!(text.contains("Name:"));
        assert!(text.contains("Ana"));
        assert!(text.contains("Device brand:"));
        assert!(text.contains("uno\n"));
        assert!(text.contains("dos\n"));
        assert!(text.contains("2025-03-01 10:15:00"));
        assert!(text.contains("Customer found"));
    }

    #[test]
    fn test_json_output() {
        let text = render(
            &FormResponse::new(CustomerForm::default(), StatusMessage::not_found()),
            true,
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"]["kind"], "error");
        assert_eq!(value["status"]["text"], "Customer not found");
        assert_eq!(value["form"]["intakeTimestamp"], "");
    }

    #[test]
    fn test_cleared_prints_blank_line() {
        assert_eq!(render(&FormResponse::cleared(), false), "\n");
    }
}
