//! Procedure hint annotation.

use std::collections::HashMap;

use listing_model::ProcedureHint;

/// Text placed between a description and its hint.
pub const HINT_SEPARATOR: &str = "\n    ";

/// Append the first matching hint for `code` to `description`.
///
/// Pure: callers always get a fresh string, so annotating the same card
/// twice never stacks hints.
pub fn annotate(code: &str, description: &str, hints: &[ProcedureHint]) -> String {
    match hints.iter().find(|hint| hint.code == code) {
        Some(hint) => join_hint(description, &hint.hint),
        None => description.to_string(),
    }
}

fn join_hint(description: &str, hint: &str) -> String {
    format!("{description}{HINT_SEPARATOR}{hint}")
}

/// Code-indexed hints with the same first-match semantics as [`annotate`].
#[derive(Debug, Clone, Default)]
pub struct HintIndex<'a> {
    by_code: HashMap<&'a str, &'a str>,
}

impl<'a> HintIndex<'a> {
    pub fn new(hints: &'a [ProcedureHint]) -> Self {
        let mut by_code = HashMap::with_capacity(hints.len());
        for hint in hints {
            by_code
                .entry(hint.code.as_str())
                .or_insert(hint.hint.as_str());
        }
        Self { by_code }
    }

    fn hint_for(&self, code: &str) -> Option<&'a str> {
        self.by_code.get(code).copied()
    }

    pub fn annotate(&self, code: &str, description: &str) -> String {
        match self.hint_for(code) {
            Some(hint) => join_hint(description, hint),
            None => description.to_string(),
        }
    }
}
