use serde::{Deserialize, Serialize};

/// Merge pass that produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntrySource {
    /// Direct card owned by the surgeon.
    SurgeonCard,
    /// Direct card owned by a best-practice owner on the surgeon's service line.
    BestPracticeCard,
    /// Expansion of a grouped card owned by the surgeon.
    SurgeonGroup,
    /// Expansion of a best-practice grouped card.
    BestPracticeGroup,
}

impl EntrySource {
    /// All sources in merge pass order.
    pub const ALL: [EntrySource; 4] = [
        EntrySource::SurgeonCard,
        EntrySource::BestPracticeCard,
        EntrySource::SurgeonGroup,
        EntrySource::BestPracticeGroup,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SurgeonCard => "Direct",
            Self::BestPracticeCard => "Best practice",
            Self::SurgeonGroup => "Grouped",
            Self::BestPracticeGroup => "BP grouped",
        }
    }
}

/// One row of a surgeon's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub procedure_code: String,
    /// Procedure description, hint-annotated.
    pub description: String,
    pub category: String,
    pub source: EntrySource,
}
