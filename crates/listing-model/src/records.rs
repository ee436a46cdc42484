//! Reference table records.
//!
//! Each struct mirrors one source table. Column positions live in the
//! ingest crate; these types only carry the fields the merge reads.

use serde::{Deserialize, Serialize};

/// Free-text guidance for a procedure code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureHint {
    pub code: String,
    pub description: String,
    pub hint: String,
}

/// A procedure card assigned directly to an owner (DPC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectCard {
    /// Definition/category number, used as the listing sort key.
    pub category: String,
    pub owner_key: String,
    /// Raw "Name, Service" text. Only meaningful on best-practice cards.
    pub owner_label: String,
    pub procedure_code: String,
    pub procedure_description: String,
}

/// A grouped procedure card (SRPG) that expands through [`GroupExpansion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCard {
    pub category: String,
    pub owner_key: String,
    pub owner_label: String,
    pub procedure_code: String,
    /// Group description; the join key into the expansion table.
    pub group_description: String,
}

/// One concrete procedure belonging to a procedure group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupExpansion {
    pub group_description: String,
    pub procedure_code: String,
    pub procedure_description: String,
}

/// Ownership fields shared by both card tables.
pub trait CardOwnership {
    fn owner_key(&self) -> &str;
    fn owner_label(&self) -> &str;
    fn category(&self) -> &str;
}

impl CardOwnership for DirectCard {
    fn owner_key(&self) -> &str {
        &self.owner_key
    }

    fn owner_label(&self) -> &str {
        &self.owner_label
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl CardOwnership for GroupedCard {
    fn owner_key(&self) -> &str {
        &self.owner_key
    }

    fn owner_label(&self) -> &str {
        &self.owner_label
    }

    fn category(&self) -> &str {
        &self.category
    }
}
