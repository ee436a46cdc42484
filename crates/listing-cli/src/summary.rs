use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_cli::types::{ListingStatus, RunSummary, SourceCounts};
use listing_model::EntrySource;

pub fn print_summary(result: &RunSummary) {
    println!("Output: {}", result.output_dir.display());
    println!("Generated: {}", result.generated_on);
    if result.dry_run {
        println!("Dry run: no files written");
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("Key"), header_cell("Surgeon")];
    header.extend(EntrySource::ALL.iter().map(|source| header_cell(source.label())));
    header.push(header_cell("Total"));
    header.push(header_cell("Listing"));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = SourceCounts::default();
    for summary in &result.surgeons {
        totals.direct += summary.counts.direct;
        totals.best_practice += summary.counts.best_practice;
        totals.grouped += summary.counts.grouped;
        totals.best_practice_grouped += summary.counts.best_practice_grouped;

        let mut row = vec![
            Cell::new(&summary.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&summary.name),
        ];
        row.extend(
            EntrySource::ALL
                .iter()
                .map(|source| count_cell(summary.counts.get(*source))),
        );
        row.push(Cell::new(summary.counts.total()).add_attribute(Attribute::Bold));
        row.push(status_cell(&summary.status));
        table.add_row(row);
    }

    let mut total_row = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} surgeons", result.surgeons.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ];
    total_row.extend(
        EntrySource::ALL
            .iter()
            .map(|source| count_cell(totals.get(*source)).add_attribute(Attribute::Bold)),
    );
    total_row.push(Cell::new(totals.total()).add_attribute(Attribute::Bold));
    total_row.push(dim_cell(format!(
        "{} written, {} skipped",
        result.written(),
        result.skipped()
    )));
    table.add_row(total_row);
    println!("{table}");

    if !result.unknown_keys.is_empty() {
        eprintln!("Unknown surgeon keys:");
        for key in &result.unknown_keys {
            eprintln!("- {key}");
        }
    }
    if !result.collisions.is_empty() {
        eprintln!("Overwritten listings (file name shared by several surgeons):");
        for path in &result.collisions {
            eprintln!("- {}", path.display());
        }
    }
}

fn status_cell(status: &ListingStatus) -> Cell {
    match status {
        ListingStatus::Written(path) => Cell::new(path.display()).fg(Color::Green),
        ListingStatus::Planned(path) => Cell::new(path.display()).fg(Color::Yellow),
        ListingStatus::Skipped => dim_cell("skipped"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
