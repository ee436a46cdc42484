use std::path::PathBuf;

use serde::Serialize;

use listing_core::ProcedureListing;
use listing_model::EntrySource;

/// Entry counts per merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub direct: usize,
    pub best_practice: usize,
    pub grouped: usize,
    pub best_practice_grouped: usize,
}

impl SourceCounts {
    pub fn from_listing(listing: &ProcedureListing) -> Self {
        Self {
            direct: listing.count_by_source(EntrySource::SurgeonCard),
            best_practice: listing.count_by_source(EntrySource::BestPracticeCard),
            grouped: listing.count_by_source(EntrySource::SurgeonGroup),
            best_practice_grouped: listing.count_by_source(EntrySource::BestPracticeGroup),
        }
    }

    pub fn get(&self, source: EntrySource) -> usize {
        match source {
            EntrySource::SurgeonCard => self.direct,
            EntrySource::BestPracticeCard => self.best_practice,
            EntrySource::SurgeonGroup => self.grouped,
            EntrySource::BestPracticeGroup => self.best_practice_grouped,
        }
    }

    pub fn total(&self) -> usize {
        self.direct + self.best_practice + self.grouped + self.best_practice_grouped
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum ListingStatus {
    Written(PathBuf),
    /// Dry run: the file that would have been written.
    Planned(PathBuf),
    /// No entries, no file.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurgeonSummary {
    pub key: String,
    /// "{last}, {first}".
    pub name: String,
    pub service_line: String,
    pub counts: SourceCounts,
    pub status: ListingStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    /// ISO date printed on every listing.
    pub generated_on: String,
    pub surgeons: Vec<SurgeonSummary>,
    /// Requested surgeon keys absent from the roster.
    pub unknown_keys: Vec<String>,
    /// Output files claimed by more than one surgeon.
    pub collisions: Vec<PathBuf>,
}

impl RunSummary {
    pub fn written(&self) -> usize {
        self.surgeons
            .iter()
            .filter(|summary| matches!(summary.status, ListingStatus::Written(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.surgeons
            .iter()
            .filter(|summary| summary.status == ListingStatus::Skipped)
            .count()
    }
}
