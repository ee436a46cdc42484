pub mod hints;
pub mod merge;
pub mod ordering;
pub mod roster;

pub use hints::{HINT_SEPARATOR, HintIndex, annotate};
pub use merge::{
    MergeEngine, ProcedureListing, best_practice_applies, derive_best_practice_service,
    merge_procedures,
};
pub use ordering::{compare_categories, sort_by_category};
pub use roster::{BestPracticeRules, Roster, reduce_roster};
