//! Surgeon listing rendering.
//!
//! A listing is laid out as plain data first ([`layout`]) and then drawn
//! onto PDF pages ([`pdf`]):
//!
//! - **Running title**: surgeon identity, bold and centred on every page
//! - **Table**: code / description / category, header row repeated per page
//! - **Footer line**: the generation date after the table

mod error;
pub mod layout;
mod naming;
mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use listing_model::{MergedEntry, Surgeon};

pub use error::{ReportError, Result};
pub use layout::{
    ListingLayout, PageGeometry, PageLayout, PlacedRow, PlacedText, TableRow, layout_listing,
    wrap_text,
};
pub use naming::{listing_file_name, listing_path};
pub use pdf::write_pdf;

/// Everything needed to render one surgeon's listing.
#[derive(Debug, Clone)]
pub struct ListingDocument<'a> {
    pub surgeon: &'a Surgeon,
    /// Entries in display order.
    pub entries: &'a [MergedEntry],
    pub generated_on: NaiveDate,
}

impl ListingDocument<'_> {
    pub fn header_row(&self) -> [String; 3] {
        [
            "CODE".to_string(),
            format!("DESCRIPTION for {}", self.surgeon.last_name),
            "DPC".to_string(),
        ]
    }

    pub fn body_rows(&self) -> Vec<[String; 3]> {
        self.entries
            .iter()
            .map(|entry| {
                [
                    entry.procedure_code.clone(),
                    entry.description.clone(),
                    entry.category.clone(),
                ]
            })
            .collect()
    }

    pub fn generated_line(&self) -> String {
        format!("Report generated: {}", self.generated_on.format("%Y-%m-%d"))
    }
}

/// Result of rendering one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    Written(PathBuf),
    /// The surgeon had no entries; nothing was written.
    Skipped,
}

/// Render `document` into `output_dir`.
///
/// Surgeons without entries are skipped and no file is created.
pub fn write_listing(document: &ListingDocument<'_>, output_dir: &Path) -> Result<ListingOutcome> {
    if document.entries.is_empty() {
        return Ok(ListingOutcome::Skipped);
    }
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = listing_path(output_dir, document.surgeon);
    let geometry = PageGeometry::default();
    let layout = layout_listing(document, &geometry);
    write_pdf(&layout, &geometry, &path)?;
    info!(
        surgeon = %document.surgeon.key,
        entries = document.entries.len(),
        pages = layout.pages.len(),
        path = %path.display(),
        "listing written"
    );
    Ok(ListingOutcome::Written(path))
}
