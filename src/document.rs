//! DOCX export of generated itineraries
//!
//! Builds a minimal word-processing document (title, route line, section
//! label and the itinerary body) and writes it to a temporary file that is
//! left for the operating system to reap.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use tracing::{debug, info, instrument};

use crate::models::Itinerary;
use crate::{Result, TravelPlanError};

/// MIME type of the downloadable document
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const DOCUMENT_TITLE: &str = "Travel Itinerary";
pub const DETAILS_LABEL: &str = "Itinerary Details:";

const TITLE_STYLE_ID: &str = "Title";

/// Download name for an itinerary. Only departure and destination matter.
#[must_use]
pub fn download_file_name(departure: &str, destination: &str) -> String {
    format!("itinerary_{departure}_to_{destination}.docx")
}

/// `Content-Disposition` value offering `file_name` as an attachment.
///
/// The plain `filename` parameter carries an ASCII fallback; the exact name
/// goes into the RFC 5987 `filename*` parameter.
#[must_use]
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    )
}

/// Layout of the exported itinerary document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDocument {
    pub title: String,
    pub route: String,
    pub section_label: String,
    pub body: String,
}

/// A document written to disk and the name it is offered under
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub path: PathBuf,
    pub file_name: String,
}

impl ItineraryDocument {
    #[must_use]
    pub fn new(itinerary: &Itinerary, departure: &str, destination: &str) -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            route: format!("From: {departure} To: {destination}"),
            section_label: DETAILS_LABEL.to_string(),
            body: itinerary.as_str().to_string(),
        }
    }

    fn build(&self) -> Docx {
        let title_style = Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
            .name("Title")
            .size(56)
            .bold();

        Docx::new()
            .add_style(title_style)
            .add_paragraph(
                Paragraph::new()
                    .style(TITLE_STYLE_ID)
                    .add_run(Run::new().add_text(&self.title)),
            )
            .add_paragraph(text_paragraph(&self.route))
            .add_paragraph(text_paragraph(&self.section_label))
            .add_paragraph(text_paragraph(&self.body))
    }

    /// Render the document as a DOCX package
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.build()
            .build()
            .pack(&mut buffer)
            .map_err(|e| TravelPlanError::document(format!("Failed to pack DOCX: {e}")))?;
        Ok(buffer.into_inner())
    }

    /// Write the rendered document to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        debug!("Wrote itinerary document to {}", path.display());
        Ok(())
    }
}

/// One paragraph holding `text`; line endings (`\n`, `\r\n`, `\r`) become
/// line breaks so the text stays in a single paragraph. Read back, every
/// break is a `\n`.
fn text_paragraph(text: &str) -> Paragraph {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut run = Run::new();
    for (index, line) in normalized.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    Paragraph::new().add_run(run)
}

/// Render the itinerary into a kept temporary `.docx` file
#[instrument(skip(itinerary), fields(bytes = itinerary.as_str().len()))]
pub fn export(itinerary: &Itinerary, departure: &str, destination: &str) -> Result<ExportedDocument> {
    let document = ItineraryDocument::new(itinerary, departure, destination);
    let bytes = document.to_bytes()?;

    let mut file = tempfile::Builder::new()
        .prefix("itinerary_")
        .suffix(".docx")
        .tempfile()?;
    file.write_all(&bytes)?;
    file.flush()?;

    let (_, path) = file.keep().map_err(|e| TravelPlanError::from(e.error))?;
    info!("Exported itinerary document to {}", path.display());

    Ok(ExportedDocument {
        path,
        file_name: download_file_name(departure, destination),
    })
}
