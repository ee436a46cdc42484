use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;

use listing_core::Roster;
use listing_model::{ListingOptions, SourcePaths};
use listing_cli::config::load_config;
use listing_cli::pipeline::{generate_listings, load_roster, write_summary_json};
use listing_cli::types::RunSummary;

use crate::cli::{GenerateArgs, RosterArgs, SourceArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_generate(args: &GenerateArgs) -> Result<RunSummary> {
    let mut options = resolve_options(&args.sources)?;
    if let Some(dir) = &args.output_dir {
        options.output.dir.clone_from(dir);
    }
    if args.dry_run {
        options.output.dry_run = true;
    }
    if !args.surgeons.is_empty() {
        options.roster.only_keys.clone_from(&args.surgeons);
    }

    let summary = generate_listings(&options, Local::now().date_naive())?;
    if let Some(path) = &args.summary_json {
        write_summary_json(&summary, path)?;
    }
    Ok(summary)
}

pub fn run_roster(args: &RosterArgs) -> Result<()> {
    let options = resolve_options(&args.sources)?;
    let roster = load_roster(&options.sources, &options.roster)?;
    print_roster(&roster);
    Ok(())
}

/// Config file values with CLI flags applied on top.
fn resolve_options(args: &SourceArgs) -> Result<ListingOptions> {
    let mut options =
        load_config(args.config.as_deref(), Path::new(".")).context("load configuration")?;
    if let Some(dir) = &args.source_dir {
        options.sources = SourcePaths::in_dir(dir);
    }
    if args.include_best_practice {
        options.roster.include_best_practice_owners = true;
    }
    Ok(options)
}

fn print_roster(roster: &Roster) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Surgeon"),
        header_cell("Service line"),
    ]);
    apply_table_style(&mut table);
    for surgeon in &roster.surgeons {
        table.add_row(vec![
            surgeon.key.clone(),
            surgeon.to_string(),
            surgeon.service_line.clone(),
        ]);
    }
    println!("Surgeons: {}", roster.surgeons.len());
    println!("{table}");

    if roster.best_practice.is_empty() {
        return;
    }
    let mut rules = Table::new();
    rules.set_header(vec![header_cell("Owner key"), header_cell("Label")]);
    apply_table_style(&mut rules);
    for (owner_key, label) in roster.best_practice.iter() {
        rules.add_row(vec![owner_key, label]);
    }
    println!();
    println!("Best-practice owners: {}", roster.best_practice.len());
    println!("{rules}");
}
