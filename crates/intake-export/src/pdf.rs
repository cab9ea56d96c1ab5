//! # PDF Rendering
//!
//! Draws layout lines with the builtin PDF fonts. No font files are embedded.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};
use intake_core::report::{ReportFont, ReportLayout};

const LAYER_NAME: &str = "Report";

/// Millimetres per PostScript point.
const MM_PER_PT: f32 = 25.4 / 72.0;

fn pt_to_mm(points: f32) -> Mm {
    Mm(points * MM_PER_PT)
}

fn pdf_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

/// Renders a layout to PDF bytes.
///
/// Each layout page becomes one PDF page. Every line carries its own font
/// and size, so continuation pages select the body font again.
pub fn render_pdf(layout: &ReportLayout) -> ExportResult<Vec<u8>> {
    let width = pt_to_mm(layout.page_width);
    let height = pt_to_mm(layout.page_height);

    let (doc, first_page, first_layer) =
        PdfDocument::new(layout.title.as_str(), width, height, LAYER_NAME);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut first = Some(doc.get_page(first_page).get_layer(first_layer));

    for page in &layout.pages {
        let layer = match first.take() {
            Some(layer) => layer,
            None => {
                let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
                doc.get_page(page_index).get_layer(layer_index)
            }
        };

        for line in &page.lines {
            let font: &IndirectFontRef = match line.font {
                ReportFont::Helvetica => &regular,
                ReportFont::HelveticaBold => &bold,
            };
            layer.use_text(
                line.text.as_str(),
                line.font_size,
                pt_to_mm(line.x),
                pt_to_mm(line.y),
                font,
            );
        }
    }

    debug!(pages = layout.page_count(), "PDF document built");
    doc.save_to_bytes().map_err(pdf_error)
}

/// Writes the export artifact to a fixed location.
///
/// ## Usage
/// ```rust,ignore
/// let exporter = PdfExporter::new(".", "clientes_yangq2025.pdf")?;
/// let path = exporter.export(&layout)?;
/// ```
#[derive(Debug, Clone)]
pub struct PdfExporter {
    directory: PathBuf,
    file_name: String,
}

impl PdfExporter {
    /// Creates an exporter writing `file_name` inside `directory`.
    ///
    /// `file_name` must be a bare file name, not a path.
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> ExportResult<Self> {
        let file_name = file_name.into();

        if file_name.trim().is_empty() {
            return Err(ExportError::InvalidTarget(
                "file name cannot be empty".to_string(),
            ));
        }
        if Path::new(&file_name).file_name().and_then(|n| n.to_str()) != Some(file_name.as_str()) {
            return Err(ExportError::InvalidTarget(format!(
                "'{}' is not a plain file name",
                file_name
            )));
        }

        Ok(PdfExporter {
            directory: directory.into(),
            file_name,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Where the artifact is written.
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Renders `layout` and writes it, replacing any earlier export.
    ///
    /// ## Returns
    /// The path of the written file.
    pub fn export(&self, layout: &ReportLayout) -> ExportResult<PathBuf> {
        let bytes = render_pdf(layout)?;
        let path = self.output_path();

        if !self.directory.as_os_str().is_empty() {
            fs::create_dir_all(&self.directory).map_err(|source| ExportError::Write {
                path: self.directory.display().to_string(),
                source,
            })?;
        }

        fs::write(&path, &bytes).map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;

        info!(
            path = %path.display(),
            pages = layout.page_count(),
            records = layout.record_count,
            bytes = bytes.len(),
            "Export written"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::report::{layout_report, ReportSettings};
    use intake_core::CustomerRecord;

    fn records(n: usize) -> Vec<CustomerRecord> {
        (1..=n)
            .map(|i| CustomerRecord {
                id: i as i64,
                name: format!("Customer {}", i),
                phone: format!("555-{:04}", i),
                address: "X".to_string(),
                brand: "Acme".to_string(),
                model: "M1".to_string(),
                fault: "no enciende".to_string(),
                note: "revisar fuente".to_string(),
                intake_timestamp: "2025-03-01 10:15:00".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let layout = layout_report(&records(3), &ReportSettings::default()).unwrap();
        let bytes = render_pdf(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_multi_page() {
        let layout = layout_report(&records(30), &ReportSettings::default()).unwrap();
        assert!(layout.page_count() > 1);

        let single = layout_report(&records(1), &ReportSettings::default()).unwrap();
        let many = render_pdf(&layout).unwrap();
        let one = render_pdf(&single).unwrap();
        assert!(many.len() > one.len());
    }

    #[test]
    fn test_pdf_pages_follow_layout() {
        use printpdf::lopdf::Document;

        let layout = layout_report(&records(30), &ReportSettings::default()).unwrap();
        let bytes = render_pdf(&layout).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), layout.page_count());

        let contents: Vec<String> = pages
            .values()
            .map(|id| String::from_utf8_lossy(&doc.get_page_content(*id).unwrap()).into_owned())
            .collect();

        assert!(contents[0].contains("Customer Database - YangQ2025"));
        assert!(contents[0].contains("Name: Customer 1 |"));
        assert!(contents[3].contains("Name: Customer 30 |"));
        assert!(!contents[0].contains("Customer 30 |"));
    }

    #[test]
    fn test_export_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path(), "clientes_yangq2025.pdf").unwrap();

        let target = exporter.output_path();
        fs::write(&target, b"stale").unwrap();

        let layout = layout_report(&records(2), &ReportSettings::default()).unwrap();
        let path = exporter.export(&layout).unwrap();

        assert_eq!(path, target);
        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports");
        let exporter = PdfExporter::new(&nested, "out.pdf").unwrap();

        let layout = layout_report(&records(1), &ReportSettings::default()).unwrap();
        exporter.export(&layout).unwrap();
        assert!(nested.join("out.pdf").exists());
    }

    #[test]
    fn test_rejects_bad_file_names() {
        assert!(PdfExporter::new(".", "").is_err());
        assert!(PdfExporter::new(".", "reports/out.pdf").is_err());
        assert!(PdfExporter::new(".", "..").is_err());
        assert!(PdfExporter::new(".", "out.pdf").is_ok());
    }
}
