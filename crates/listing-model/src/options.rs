//! Configuration options for listing generation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Locations of the five reference tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePaths {
    pub hints: PathBuf,
    pub direct_cards: PathBuf,
    pub grouped_cards: PathBuf,
    pub surgeons: PathBuf,
    pub expansions: PathBuf,
}

impl SourcePaths {
    /// Default file names resolved against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            hints: dir.join("procedure_hints.csv"),
            direct_cards: dir.join("dpc_cards.csv"),
            grouped_cards: dir.join("srpg_cards.csv"),
            surgeons: dir.join("surgeons.csv"),
            expansions: dir.join("srpg_procedures.csv"),
        }
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self::in_dir("source")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Directory receiving one PDF per surgeon.
    pub dir: PathBuf,
    /// Merge and report without writing files.
    pub dry_run: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("surgeon_listings"),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterOptions {
    /// Also produce listings for best-practice owners.
    ///
    /// Off by default: best-practice rows describe service-line defaults,
    /// not bookable surgeons.
    pub include_best_practice_owners: bool,
    /// Restrict generation to these surgeon keys. Empty means everyone.
    pub only_keys: Vec<String>,
}

/// Options controlling a listing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingOptions {
    pub sources: SourcePaths,
    pub output: OutputOptions,
    pub roster: RosterOptions,
}
