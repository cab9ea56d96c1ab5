//! # Export Report Layout
//!
//! Computes where every line of the export report goes, page by page. The
//! PDF writer in `intake-export` only draws what this module decides.
//!
//! ## Page Layout (US Letter, points, origin bottom-left)
//! ```text
//!  792 ┌──────────────────────────────────────────────┐
//!      │                                              │
//!  742 │        Customer Database - YangQ2025         │ ◄ title, bold 14, centered
//!      │                                              │   cursor drops 40
//!  702 │ Name: Ana | Phone: 555 | Address: X          │ ◄ x = 40, regular 10
//!  687 │ Brand: Acme | Model: M1 | Fault: no enciende │   each line drops 15
//!  672 │ Note: revisar fuente                         │
//!  657 │ Intake Date: 2025-03-01 10:15:00             │
//!      │                                              │   +10 between records
//!  632 │ Name: ...                                    │
//!      │  ...                                         │
//!   60 │ ─ ─ ─ ─ ─ ─ ─ bottom margin ─ ─ ─ ─ ─ ─ ─ ─  │ ◄ cursor below this:
//!      │                                              │   new page, back to 742
//!    0 └──────────────────────────────────────────────┘
//! ```
//!
//! Records are laid out in the order given. Nothing is sorted.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::CustomerRecord;
use crate::DEFAULT_REPORT_TITLE;

// =============================================================================
// Settings
// =============================================================================

/// One of the two builtin fonts the report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportFont {
    Helvetica,
    HelveticaBold,
}

/// Page geometry and typography, in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSettings {
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    /// Distance from the top edge to the first baseline on every page.
    pub top_margin: f32,
    /// A page break happens once the cursor drops below this.
    pub bottom_margin: f32,
    pub left_margin: f32,
    /// Drop after the title line.
    pub title_gap: f32,
    /// Drop after every record line.
    pub line_height: f32,
    /// Extra drop after each record.
    pub record_gap: f32,
    pub title_font_size: f32,
    pub body_font_size: f32,
}

impl ReportSettings {
    /// US Letter report with the given title.
    pub fn letter(title: impl Into<String>) -> Self {
        ReportSettings {
            title: title.into(),
            page_width: 612.0,
            page_height: 792.0,
            top_margin: 50.0,
            bottom_margin: 60.0,
            left_margin: 40.0,
            title_gap: 40.0,
            line_height: 15.0,
            record_gap: 10.0,
            title_font_size: 14.0,
            body_font_size: 10.0,
        }
    }

    /// Baseline of the first line on a page.
    pub fn top_y(&self) -> f32 {
        self.page_height - self.top_margin
    }

    fn validate(&self) -> CoreResult<()> {
        if self.line_height <= 0.0 {
            return Err(CoreError::InvalidReportSettings {
                reason: "line height must be positive".to_string(),
            });
        }
        if self.record_gap < 0.0 || self.title_gap < 0.0 {
            return Err(CoreError::InvalidReportSettings {
                reason: "gaps cannot be negative".to_string(),
            });
        }
        if self.top_y() <= self.bottom_margin {
            return Err(CoreError::InvalidReportSettings {
                reason: format!(
                    "top margin {} leaves no room above bottom margin {}",
                    self.top_margin, self.bottom_margin
                ),
            });
        }
        Ok(())
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings::letter(DEFAULT_REPORT_TITLE)
    }
}

// =============================================================================
// Layout Output
// =============================================================================

/// A line of text at a fixed baseline position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: ReportFont,
    pub font_size: f32,
}

/// Lines drawn on one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportPage {
    pub lines: Vec<ReportLine>,
}

/// The complete report, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLayout {
    /// Document title, also the first line of the first page.
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<ReportPage>,
    /// Number of record blocks laid out.
    pub record_count: usize,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every line in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}

// =============================================================================
// Layout
// =============================================================================

/// The four lines printed for one record.
pub fn record_lines(record: &CustomerRecord) -> [String; 4] {
    [
        format!(
            "Name: {} | Phone: {} | Address: {}",
            record.name, record.phone, record.address
        ),
        format!(
            "Brand: {} | Model: {} | Fault: {}",
            record.brand, record.model, record.fault
        ),
        format!("Note: {}", single_line(&record.note)),
        format!("Intake Date: {}", record.intake_timestamp),
    ]
}

/// Folds a multi-line note into one line.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lays out the title and one block per record.
///
/// ## Pagination
/// After each line the cursor drops by `line_height`; after each record by
/// `record_gap` as well. Whenever the cursor ends up below `bottom_margin`
/// the next line starts a new page at [`ReportSettings::top_y`]. A page is
/// only opened when something is drawn on it, so there is never a trailing
/// blank page.
pub fn layout_report(
    records: &[CustomerRecord],
    settings: &ReportSettings,
) -> CoreResult<ReportLayout> {
    settings.validate()?;

    let top = settings.top_y();
    let mut pages = vec![ReportPage::default()];
    let mut y = top;
    let mut break_pending = false;

    let title_width = text_width(&settings.title, ReportFont::HelveticaBold, settings.title_font_size);
    pages[0].lines.push(ReportLine {
        text: settings.title.clone(),
        x: ((settings.page_width - title_width) / 2.0).max(0.0),
        y,
        font: ReportFont::HelveticaBold,
        font_size: settings.title_font_size,
    });
    y -= settings.title_gap;

    for record in records {
        for text in record_lines(record) {
            if break_pending {
                pages.push(ReportPage::default());
                break_pending = false;
            }

            if let Some(page) = pages.last_mut() {
                page.lines.push(ReportLine {
                    text,
                    x: settings.left_margin,
                    y,
                    font: ReportFont::Helvetica,
                    font_size: settings.body_font_size,
                });
            }

            y -= settings.line_height;
            if y < settings.bottom_margin {
                y = top;
                break_pending = true;
            }
        }

        // A pending break already reset the cursor; the gap is not carried over.
        if !break_pending {
            y -= settings.record_gap;
            if y < settings.bottom_margin {
                y = top;
                break_pending = true;
            }
        }
    }

    Ok(ReportLayout {
        title: settings.title.clone(),
        page_width: settings.page_width,
        page_height: settings.page_height,
        pages,
        record_count: records.len(),
    })
}

// =============================================================================
// Font Metrics
// =============================================================================

/// Advance widths (1/1000 em) for printable ASCII, space through tilde.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Width of `text` in points when set in `font` at `size`.
///
/// Characters outside printable ASCII are measured as a digit.
pub fn text_width(text: &str, font: ReportFont, size: f32) -> f32 {
    let table = match font {
        ReportFont::Helvetica => &HELVETICA_WIDTHS,
        ReportFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
    };

    let units: u32 = text
        .chars()
        .map(|c| match c {
            ' '..='~' => u32::from(table[c as usize - 0x20]),
            _ => 556,
        })
        .sum();

    units as f32 * size / 1000.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> CustomerRecord {
        CustomerRecord {
            id: n as i64,
            name: format!("Customer {}", n),
            phone: format!("555-{:04}", n),
            address: format!("Street {}", n),
            brand: "Acme".to_string(),
            model: "M1".to_string(),
            fault: "no enciende".to_string(),
            note: "revisar fuente".to_string(),
            intake_timestamp: "2025-03-01 10:15:00".to_string(),
        }
    }

    fn body_lines(layout: &ReportLayout) -> Vec<&ReportLine> {
        layout
            .lines()
            .filter(|l| l.font == ReportFont::Helvetica)
            .collect()
    }

    #[test]
    fn test_title_is_centered_on_first_page() {
        let settings = ReportSettings::default();
        let layout = layout_report(&[record(1)], &settings).unwrap();

        let title = &layout.pages[0].lines[0];
        assert_eq!(title.text, "Customer Database - YangQ2025");
        assert_eq!(title.font, ReportFont::HelveticaBold);
        assert_eq!(title.y, 742.0);

        let width = text_width(&title.text, ReportFont::HelveticaBold, 14.0);
        let right_gap = settings.page_width - (title.x + width);
        assert!((right_gap - title.x).abs() < 0.01);
    }

    #[test]
    fn test_single_record_block() {
        let layout = layout_report(&[record(1)], &ReportSettings::default()).unwrap();
        assert_eq!(layout.page_count(), 1);

        let lines = body_lines(&layout);
        let ys: Vec<f32> = lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![702.0, 687.0, 672.0, 657.0]);
        assert!(lines.iter().all(|l| l.x == 40.0));

        assert_eq!(lines[0].text, "Name: Customer 1 | Phone: 555-0001 | Address: Street 1");
        assert_eq!(lines[1].text, "Brand: Acme | Model: M1 | Fault: no enciende");
        assert_eq!(lines[2].text, "Note: revisar fuente");
        assert_eq!(lines[3].text, "Intake Date: 2025-03-01 10:15:00");
    }

    #[test]
    fn test_records_are_separated_by_gap() {
        let layout = layout_report(&[record(1), record(2)], &ReportSettings::default()).unwrap();
        let lines = body_lines(&layout);
        // last line of first block at 657, next block starts 15 + 10 lower
        assert_eq!(lines[4].y, 632.0);
    }

    #[test]
    fn test_empty_record_list_has_only_title() {
        let layout = layout_report(&[], &ReportSettings::default()).unwrap();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.pages[0].lines.len(), 1);
        assert_eq!(layout.record_count, 0);
    }

    #[test]
    fn test_pagination_keeps_every_line_inside_margins() {
        let records: Vec<CustomerRecord> = (1..=40).map(record).collect();
        let settings = ReportSettings::default();
        let layout = layout_report(&records, &settings).unwrap();

        assert!(layout.page_count() > 1);
        for line in layout.lines() {
            assert!(line.y >= settings.bottom_margin, "line below margin: {:?}", line);
            assert!(line.y <= settings.top_y());
        }

        // every continuation page starts at the top
        for page in &layout.pages[1..] {
            assert_eq!(page.lines[0].y, settings.top_y());
            assert_eq!(page.lines[0].font, ReportFont::Helvetica);
            assert_eq!(page.lines[0].font_size, 10.0);
        }

        // no blank pages
        assert!(layout.pages.iter().all(|p| !p.lines.is_empty()));
    }

    #[test]
    fn test_record_ending_on_break_does_not_shift_next_page() {
        // Record 29 ends at y=67; its last drop breaks the page.
        let records: Vec<CustomerRecord> = (1..=30).map(record).collect();
        let settings = ReportSettings::default();
        let layout = layout_report(&records, &settings).unwrap();

        assert_eq!(layout.page_count(), 4);
        let first = &layout.pages[3].lines[0];
        assert!(first.text.starts_with("Name: Customer 30 |"));
        assert_eq!(first.y, settings.top_y());
    }

    #[test]
    fn test_every_record_appears_once_in_order() {
        let records: Vec<CustomerRecord> = (1..=25).map(record).collect();
        let layout = layout_report(&records, &ReportSettings::default()).unwrap();
        assert_eq!(layout.record_count, 25);

        let names: Vec<&str> = layout
            .lines()
            .filter(|l| l.text.starts_with("Name: "))
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(names.len(), 25);
        assert!(names[0].contains("Customer 1 |"));
        assert!(names[24].contains("Customer 25 |"));

        let dates = layout
            .lines()
            .filter(|l| l.text.starts_with("Intake Date: "))
            .count();
        assert_eq!(dates, 25);
    }

    #[test]
    fn test_break_happens_exactly_below_margin() {
        // Records start at 702, 632, 562, ... ; the tenth starts at 72 and
        // its second line no longer fits above 60.
        let records: Vec<CustomerRecord> = (1..=10).map(record).collect();
        let layout = layout_report(&records, &ReportSettings::default()).unwrap();

        assert_eq!(layout.page_count(), 2);
        let last_on_first = layout.pages[0].lines.last().unwrap();
        assert_eq!(last_on_first.y, 72.0);
        assert!(last_on_first.text.starts_with("Name: Customer 10"));
        assert!(layout.pages[1].lines[0].text.starts_with("Brand: "));
    }

    #[test]
    fn test_multiline_note_stays_on_one_line() {
        let mut rec = record(1);
        rec.note = "first\n  second\r\n\nthird".to_string();
        assert_eq!(record_lines(&rec)[2], "Note: first second third");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = ReportSettings::default();
        settings.line_height = 0.0;
        assert!(layout_report(&[], &settings).is_err());

        let mut settings = ReportSettings::default();
        settings.top_margin = 740.0;
        assert!(layout_report(&[], &settings).is_err());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", ReportFont::Helvetica, 10.0), 0.0);
        // "A" is 667 units regular, 722 bold
        assert!((text_width("A", ReportFont::Helvetica, 10.0) - 6.67).abs() < 0.001);
        assert!((text_width("A", ReportFont::HelveticaBold, 10.0) - 7.22).abs() < 0.001);
        assert!((text_width("é", ReportFont::Helvetica, 10.0) - 5.56).abs() < 0.001);
    }
}
