//! Per-surgeon procedure merge.
//!
//! A surgeon's listing is built from four sources, in this order:
//!
//! 1. Direct cards owned by the surgeon.
//! 2. Direct cards owned by a best-practice owner whose service matches
//!    the surgeon's service line.
//! 3. Grouped cards owned by the surgeon, expanded through the group table.
//! 4. Best-practice grouped cards for the surgeon's service line, expanded.
//!
//! No pass removes entries, and the first entry added for a procedure code
//! always wins.

use std::collections::HashMap;

use tracing::{debug, warn};

use listing_model::{
    CardOwnership, DirectCard, EntrySource, GroupExpansion, GroupedCard, MergedEntry,
    ProcedureHint, Surgeon,
};

use crate::hints::HintIndex;
use crate::ordering::sort_by_category;
use crate::roster::BestPracticeRules;

/// Ordered entries plus a code index for constant-time membership checks.
#[derive(Debug, Clone, Default)]
pub struct ProcedureListing {
    entries: Vec<MergedEntry>,
    index: HashMap<String, usize>,
}

impl ProcedureListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&MergedEntry> {
        self.index.get(code).map(|&idx| &self.entries[idx])
    }

    /// Add `entry` unless its procedure code is already listed.
    ///
    /// Returns `false` when the entry was dropped.
    pub fn insert(&mut self, entry: MergedEntry) -> bool {
        if self.index.contains_key(&entry.procedure_code) {
            return false;
        }
        self.index
            .insert(entry.procedure_code.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Entries in merge order.
    pub fn entries(&self) -> &[MergedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_by_source(&self, source: EntrySource) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.source == source)
            .count()
    }

    /// Entries sorted for rendering: by category, merge order among ties.
    pub fn into_sorted_entries(self) -> Vec<MergedEntry> {
        let mut entries = self.entries;
        sort_by_category(&mut entries);
        entries
    }
}

/// Service line a best-practice card applies to.
///
/// The owner label follows a "Name, Service" convention: the first
/// comma-separated token is dropped and the remainder is concatenated
/// without separators, then trimmed.
pub fn derive_best_practice_service(owner_label: &str) -> String {
    owner_label
        .split(',')
        .skip(1)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether a best-practice card applies to surgeons on `service_line`.
///
/// Cards whose owner is not a best-practice owner never apply.
pub fn best_practice_applies<C: CardOwnership>(
    card: &C,
    rules: &BestPracticeRules,
    service_line: &str,
) -> bool {
    if !rules.contains_owner(card.owner_key()) {
        return false;
    }
    let service = derive_best_practice_service(card.owner_label());
    service == service_line
}

/// Reference tables prepared for repeated per-surgeon merges.
#[derive(Debug, Clone)]
pub struct MergeEngine<'a> {
    direct_cards: &'a [DirectCard],
    grouped_cards: &'a [GroupedCard],
    expansions: HashMap<&'a str, Vec<&'a GroupExpansion>>,
    hints: HintIndex<'a>,
    best_practice: &'a BestPracticeRules,
}

impl<'a> MergeEngine<'a> {
    pub fn new(
        direct_cards: &'a [DirectCard],
        grouped_cards: &'a [GroupedCard],
        expansions: &'a [GroupExpansion],
        hints: &'a [ProcedureHint],
        best_practice: &'a BestPracticeRules,
    ) -> Self {
        let mut by_group: HashMap<&'a str, Vec<&'a GroupExpansion>> = HashMap::new();
        for expansion in expansions {
            by_group
                .entry(expansion.group_description.as_str())
                .or_default()
                .push(expansion);
        }
        Self {
            direct_cards,
            grouped_cards,
            expansions: by_group,
            hints: HintIndex::new(hints),
            best_practice,
        }
    }

    /// Build the listing for one surgeon. Each call starts from an empty listing.
    pub fn merge(&self, surgeon: &Surgeon) -> ProcedureListing {
        let mut listing = ProcedureListing::new();

        for card in self
            .direct_cards
            .iter()
            .filter(|card| card.owner_key == surgeon.key)
        {
            if !listing.insert(self.direct_entry(card, EntrySource::SurgeonCard)) {
                warn!(
                    surgeon = %surgeon.key,
                    procedure_code = %card.procedure_code,
                    "duplicate direct card for surgeon, keeping the first"
                );
            }
        }

        for card in self
            .direct_cards
            .iter()
            .filter(|card| best_practice_applies(*card, self.best_practice, &surgeon.service_line))
        {
            listing.insert(self.direct_entry(card, EntrySource::BestPracticeCard));
        }

        for card in self
            .grouped_cards
            .iter()
            .filter(|card| card.owner_key == surgeon.key)
        {
            self.expand_into(&mut listing, card, EntrySource::SurgeonGroup);
        }

        for card in self
            .grouped_cards
            .iter()
            .filter(|card| best_practice_applies(*card, self.best_practice, &surgeon.service_line))
        {
            self.expand_into(&mut listing, card, EntrySource::BestPracticeGroup);
        }

        debug!(
            surgeon = %surgeon.key,
            direct = listing.count_by_source(EntrySource::SurgeonCard),
            best_practice = listing.count_by_source(EntrySource::BestPracticeCard),
            grouped = listing.count_by_source(EntrySource::SurgeonGroup),
            best_practice_grouped = listing.count_by_source(EntrySource::BestPracticeGroup),
            "merged procedures"
        );
        listing
    }

    fn direct_entry(&self, card: &DirectCard, source: EntrySource) -> MergedEntry {
        MergedEntry {
            procedure_code: card.procedure_code.clone(),
            description: self
                .hints
                .annotate(&card.procedure_code, &card.procedure_description),
            category: card.category.clone(),
            source,
        }
    }

    fn expand_into(&self, listing: &mut ProcedureListing, card: &GroupedCard, source: EntrySource) {
        let Some(expansions) = self.expansions.get(card.group_description.as_str()) else {
            debug!(
                owner = %card.owner_key,
                group = %card.group_description,
                "grouped card has no expansions"
            );
            return;
        };
        for expansion in expansions {
            if listing.contains_code(&expansion.procedure_code) {
                continue;
            }
            listing.insert(MergedEntry {
                procedure_code: expansion.procedure_code.clone(),
                description: expansion.procedure_description.clone(),
                category: card.category.clone(),
                source,
            });
        }
    }
}

/// One-shot merge for a single surgeon.
pub fn merge_procedures(
    surgeon: &Surgeon,
    direct_cards: &[DirectCard],
    grouped_cards: &[GroupedCard],
    expansions: &[GroupExpansion],
    hints: &[ProcedureHint],
    best_practice: &BestPracticeRules,
) -> ProcedureListing {
    MergeEngine::new(direct_cards, grouped_cards, expansions, hints, best_practice).merge(surgeon)
}
