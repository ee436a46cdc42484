//! Listing generation pipeline: load, reduce, merge, render.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use listing_core::{MergeEngine, Roster, reduce_roster};
use listing_ingest::{load_reference_data, load_surgeons};
use listing_model::{ListingOptions, RosterOptions, SourcePaths};
use listing_report::{ListingDocument, ListingOutcome, listing_path, write_listing};

use crate::types::{ListingStatus, RunSummary, SourceCounts, SurgeonSummary};

/// Generate one listing per selected surgeon.
///
/// The first load or write failure aborts the run.
pub fn generate_listings(options: &ListingOptions, generated_on: NaiveDate) -> Result<RunSummary> {
    let span = info_span!("generate", output_dir = %options.output.dir.display());
    let _guard = span.enter();

    let data = load_reference_data(&options.sources).context("load reference tables")?;
    let roster = reduce_roster(&data.surgeons, &options.roster);
    let unknown_keys = unknown_keys(&roster, &options.roster.only_keys);
    for key in &unknown_keys {
        warn!(surgeon = %key, "requested surgeon is not on the roster");
    }
    let selected = roster.select(&options.roster.only_keys);
    info!(
        surgeons = roster.surgeons.len(),
        selected = selected.len(),
        best_practice_owners = roster.best_practice.len(),
        "roster ready"
    );

    let engine = MergeEngine::new(
        &data.direct_cards,
        &data.grouped_cards,
        &data.expansions,
        &data.hints,
        &roster.best_practice,
    );

    let mut claimed: HashMap<PathBuf, String> = HashMap::new();
    let mut collisions = Vec::new();
    let mut surgeons = Vec::with_capacity(selected.len());

    for surgeon in selected {
        let surgeon_span = info_span!("surgeon", key = %surgeon.key);
        let _surgeon_guard = surgeon_span.enter();

        let listing = engine.merge(surgeon);
        let counts = SourceCounts::from_listing(&listing);
        let entries = listing.into_sorted_entries();

        let status = if entries.is_empty() {
            info!("no procedures, listing skipped");
            ListingStatus::Skipped
        } else {
            let path = listing_path(&options.output.dir, surgeon);
            if let Some(previous) = claimed.insert(path.clone(), surgeon.key.clone()) {
                warn!(
                    path = %path.display(),
                    previous = %previous,
                    "listing file name already used, overwriting"
                );
                collisions.push(path.clone());
            }
            if options.output.dry_run {
                ListingStatus::Planned(path)
            } else {
                let document = ListingDocument {
                    surgeon,
                    entries: &entries,
                    generated_on,
                };
                match write_listing(&document, &options.output.dir)
                    .with_context(|| format!("write listing for {}", surgeon.key))?
                {
                    ListingOutcome::Written(path) => ListingStatus::Written(path),
                    ListingOutcome::Skipped => ListingStatus::Skipped,
                }
            }
        };

        surgeons.push(SurgeonSummary {
            key: surgeon.key.clone(),
            name: surgeon.to_string(),
            service_line: surgeon.service_line.clone(),
            counts,
            status,
        });
    }

    let summary = RunSummary {
        output_dir: options.output.dir.clone(),
        dry_run: options.output.dry_run,
        generated_on: generated_on.format("%Y-%m-%d").to_string(),
        surgeons,
        unknown_keys,
        collisions,
    };
    info!(
        written = summary.written(),
        skipped = summary.skipped(),
        dry_run = summary.dry_run,
        "generation finished"
    );
    Ok(summary)
}

/// Load and reduce only the roster table.
pub fn load_roster(sources: &SourcePaths, options: &RosterOptions) -> Result<Roster> {
    let rows = load_surgeons(&sources.surgeons).context("load surgeon roster")?;
    Ok(reduce_roster(&rows, options))
}

pub fn write_summary_json(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "run summary written");
    Ok(())
}

fn unknown_keys(roster: &Roster, requested: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|key| !roster.surgeons.iter().any(|surgeon| surgeon.key == **key))
        .cloned()
        .collect()
}
