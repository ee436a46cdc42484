pub mod entry;
pub mod options;
pub mod records;
pub mod roster;

pub use entry::{EntrySource, MergedEntry};
pub use options::{ListingOptions, OutputOptions, RosterOptions, SourcePaths};
pub use records::{CardOwnership, DirectCard, GroupExpansion, GroupedCard, ProcedureHint};
pub use roster::{BEST_PRACTICE_SENTINEL, BestPracticeRule, RosterRow, Surgeon};
