//! Surgeon roster types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Roster marker for rows that describe a clinic-wide default, not a person.
pub const BEST_PRACTICE_SENTINEL: &str = "BEST PRACTICE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surgeon {
    pub key: String,
    pub last_name: String,
    pub first_name: String,
    pub service_line: String,
}

impl Surgeon {
    /// Running page title: "{last}, {first} - {service}".
    pub fn display_title(&self) -> String {
        format!(
            "{}, {} - {}",
            self.last_name, self.first_name, self.service_line
        )
    }
}

impl fmt::Display for Surgeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.last_name, self.first_name)
    }
}

/// A best-practice owner whose cards apply to every surgeon on a service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPracticeRule {
    pub owner_key: String,
    /// Service text declared on the roster row. Informational; card
    /// matching uses the service derived from each card's owner label.
    pub service_label: String,
}

/// A classified roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterRow {
    Bookable(Surgeon),
    BestPractice(BestPracticeRule),
}

impl RosterRow {
    /// Classify a raw roster row.
    ///
    /// The roster marks best-practice owners either as "BEST PRACTICE, <service>"
    /// in the name columns or with the sentinel in the service-line column.
    pub fn classify(row: Surgeon) -> Self {
        if row.last_name == BEST_PRACTICE_SENTINEL || row.service_line == BEST_PRACTICE_SENTINEL {
            RosterRow::BestPractice(BestPracticeRule {
                owner_key: row.key,
                service_label: row.first_name,
            })
        } else {
            RosterRow::Bookable(row)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, last: &str, first: &str, service: &str) -> Surgeon {
        Surgeon {
            key: key.to_string(),
            last_name: last.to_string(),
            first_name: first.to_string(),
            service_line: service.to_string(),
        }
    }

    #[test]
    fn classifies_sentinel_in_last_name() {
        let classified = RosterRow::classify(row("BP1", "BEST PRACTICE", "Cardiology", ""));
        assert_eq!(
            classified,
            RosterRow::BestPractice(BestPracticeRule {
                owner_key: "BP1".to_string(),
                service_label: "Cardiology".to_string(),
            })
        );
    }

    #[test]
    fn classifies_sentinel_in_service_line() {
        let classified = RosterRow::classify(row("Dr. Best", "Best", "Cardiology", "BEST PRACTICE"));
        assert!(matches!(classified, RosterRow::BestPractice(rule) if rule.owner_key == "Dr. Best"));
    }

    #[test]
    fn sentinel_match_is_exact() {
        let classified = RosterRow::classify(row("S1", "Best Practice", "Ann", "Cardiology"));
        assert!(matches!(classified, RosterRow::Bookable(_)));
    }

    #[test]
    fn display_title_format() {
        let surgeon = row("S1", "Smith", "Ann", "Cardiology");
        assert_eq!(surgeon.display_title(), "Smith, Ann - Cardiology");
        assert_eq!(surgeon.to_string(), "Smith, Ann");
    }
}
