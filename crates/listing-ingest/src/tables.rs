//! Typed loaders for the five reference tables.
//!
//! Column positions follow the clinic exports:
//!
//! | Table            | Columns used                                              |
//! |------------------|-----------------------------------------------------------|
//! | procedure hints  | 0 code, 1 description, 2 hint                              |
//! | direct cards     | 1 category, 3 owner key, 4 owner label, 5 code, 6 description |
//! | grouped cards    | same as direct cards, 6 is the group description          |
//! | surgeons         | 0 key, 1 last name, 2 first name, 3 service line          |
//! | group expansions | 0 group description, 2 code, 3 description                |

use std::path::Path;

use tracing::info;

use listing_model::{
    DirectCard, GroupExpansion, GroupedCard, ProcedureHint, SourcePaths, Surgeon,
};

use crate::error::{IngestError, Result};
use crate::reader::{RawRecord, read_records};

/// Name and minimum arity of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub name: &'static str,
    pub required_fields: usize,
}

impl TableLayout {
    pub const HINTS: TableLayout = TableLayout {
        name: "procedure hints",
        required_fields: 3,
    };
    pub const DIRECT_CARDS: TableLayout = TableLayout {
        name: "direct cards",
        required_fields: 7,
    };
    pub const GROUPED_CARDS: TableLayout = TableLayout {
        name: "grouped cards",
        required_fields: 7,
    };
    pub const SURGEONS: TableLayout = TableLayout {
        name: "surgeons",
        required_fields: 4,
    };
    pub const EXPANSIONS: TableLayout = TableLayout {
        name: "group expansions",
        required_fields: 4,
    };

    fn check(&self, path: &Path, record: &RawRecord) -> Result<()> {
        if record.cells.len() < self.required_fields {
            return Err(IngestError::MalformedRow {
                table: self.name,
                path: path.to_path_buf(),
                line: record.line,
                required: self.required_fields,
                found: record.cells.len(),
            });
        }
        Ok(())
    }
}

fn load_table<T>(
    path: &Path,
    layout: TableLayout,
    build: impl Fn(&RawRecord) -> T,
) -> Result<Vec<T>> {
    let records = read_records(path)?;
    let mut out = Vec::with_capacity(records.len());
    for record in &records {
        layout.check(path, record)?;
        out.push(build(record));
    }
    Ok(out)
}

pub fn load_hints(path: &Path) -> Result<Vec<ProcedureHint>> {
    load_table(path, TableLayout::HINTS, |r| ProcedureHint {
        code: r.cell(0).to_string(),
        description: r.cell(1).to_string(),
        hint: r.cell(2).to_string(),
    })
}

pub fn load_direct_cards(path: &Path) -> Result<Vec<DirectCard>> {
    load_table(path, TableLayout::DIRECT_CARDS, |r| DirectCard {
        category: r.cell(1).to_string(),
        owner_key: r.cell(3).to_string(),
        owner_label: r.cell(4).to_string(),
        procedure_code: r.cell(5).to_string(),
        procedure_description: r.cell(6).to_string(),
    })
}

pub fn load_grouped_cards(path: &Path) -> Result<Vec<GroupedCard>> {
    load_table(path, TableLayout::GROUPED_CARDS, |r| GroupedCard {
        category: r.cell(1).to_string(),
        owner_key: r.cell(3).to_string(),
        owner_label: r.cell(4).to_string(),
        procedure_code: r.cell(5).to_string(),
        group_description: r.cell(6).to_string(),
    })
}

/// Raw roster rows, duplicates and best-practice rows included.
pub fn load_surgeons(path: &Path) -> Result<Vec<Surgeon>> {
    load_table(path, TableLayout::SURGEONS, |r| Surgeon {
        key: r.cell(0).to_string(),
        last_name: r.cell(1).to_string(),
        first_name: r.cell(2).to_string(),
        service_line: r.cell(3).to_string(),
    })
}

pub fn load_expansions(path: &Path) -> Result<Vec<GroupExpansion>> {
    load_table(path, TableLayout::EXPANSIONS, |r| GroupExpansion {
        group_description: r.cell(0).to_string(),
        procedure_code: r.cell(2).to_string(),
        procedure_description: r.cell(3).to_string(),
    })
}

/// All reference tables, in source order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub hints: Vec<ProcedureHint>,
    pub direct_cards: Vec<DirectCard>,
    pub grouped_cards: Vec<GroupedCard>,
    pub surgeons: Vec<Surgeon>,
    pub expansions: Vec<GroupExpansion>,
}

/// Load all five tables. The first failure aborts the load.
pub fn load_reference_data(paths: &SourcePaths) -> Result<ReferenceData> {
    let data = ReferenceData {
        hints: load_hints(&paths.hints)?,
        direct_cards: load_direct_cards(&paths.direct_cards)?,
        grouped_cards: load_grouped_cards(&paths.grouped_cards)?,
        surgeons: load_surgeons(&paths.surgeons)?,
        expansions: load_expansions(&paths.expansions)?,
    };
    info!(
        hints = data.hints.len(),
        direct_cards = data.direct_cards.len(),
        grouped_cards = data.grouped_cards.len(),
        roster_rows = data.surgeons.len(),
        expansions = data.expansions.len(),
        "reference data loaded"
    );
    Ok(data)
}
