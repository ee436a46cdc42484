//! Roster reduction.
//!
//! Collapses raw roster rows into the unique surgeon list and the set of
//! best-practice owners.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use listing_model::{BestPracticeRule, RosterOptions, RosterRow, Surgeon};

/// Best-practice owners keyed by owner key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestPracticeRules {
    owners: BTreeMap<String, String>,
}

impl BestPracticeRules {
    /// Register a rule. A later rule for the same owner replaces the earlier one.
    pub fn insert(&mut self, rule: BestPracticeRule) {
        self.owners.insert(rule.owner_key, rule.service_label);
    }

    pub fn contains_owner(&self, owner_key: &str) -> bool {
        self.owners.contains_key(owner_key)
    }

    pub fn service_label(&self, owner_key: &str) -> Option<&str> {
        self.owners.get(owner_key).map(String::as_str)
    }

    /// (owner key, declared service) pairs ordered by owner key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.owners
            .iter()
            .map(|(owner, service)| (owner.as_str(), service.as_str()))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl FromIterator<BestPracticeRule> for BestPracticeRules {
    fn from_iter<I: IntoIterator<Item = BestPracticeRule>>(iter: I) -> Self {
        let mut rules = Self::default();
        for rule in iter {
            rules.insert(rule);
        }
        rules
    }
}

/// Unique surgeons plus best-practice owners.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Surgeons in first-seen order.
    pub surgeons: Vec<Surgeon>,
    pub best_practice: BestPracticeRules,
}

impl Roster {
    /// Surgeons whose key is in `keys`, or all surgeons when `keys` is empty.
    pub fn select<'a>(&'a self, keys: &[String]) -> Vec<&'a Surgeon> {
        if keys.is_empty() {
            return self.surgeons.iter().collect();
        }
        self.surgeons
            .iter()
            .filter(|surgeon| keys.iter().any(|key| *key == surgeon.key))
            .collect()
    }
}

/// Reduce raw roster rows.
///
/// Surgeons are de-duplicated on exact key equality; the first row for a key
/// wins. Best-practice rows register a rule and, unless
/// `include_best_practice_owners` is set, never become surgeons.
pub fn reduce_roster(rows: &[Surgeon], options: &RosterOptions) -> Roster {
    let mut roster = Roster::default();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates = 0usize;

    for row in rows {
        let bookable = match RosterRow::classify(row.clone()) {
            RosterRow::Bookable(surgeon) => Some(surgeon),
            RosterRow::BestPractice(rule) => {
                roster.best_practice.insert(rule);
                options.include_best_practice_owners.then(|| row.clone())
            }
        };
        let Some(surgeon) = bookable else {
            continue;
        };
        if seen.insert(row.key.as_str()) {
            roster.surgeons.push(surgeon);
        } else {
            duplicates += 1;
        }
    }

    debug!(
        rows = rows.len(),
        surgeons = roster.surgeons.len(),
        duplicates,
        best_practice_owners = roster.best_practice.len(),
        "roster reduced"
    );
    roster
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
    fn first_occurrence_wins() {
        let rows = vec![
            row("S1", "Smith", "Ann", "Cardiology"),
            row("S2", "Jones", "Bob", "Orthopedics"),
            row("S1", "Smith", "Annie", "Neurology"),
        ];
        let roster = reduce_roster(&rows, &RosterOptions::default());

        let keys: Vec<&str> = roster.surgeons.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["S1", "S2"]);
        assert_eq!(roster.surgeons[0].first_name, "Ann");
    }

    #[test]
    fn key_match_is_exact() {
        let rows = vec![row("S1", "Smith", "Ann", "A"), row("S10", "Smith", "Ann", "A")];
        let roster = reduce_roster(&rows, &RosterOptions::default());

        assert_eq!(roster.surgeons.len(), 2);
    }

    #[test]
    fn best_practice_rows_are_rules_not_surgeons() {
        let rows = vec![
            row("BP1", "BEST PRACTICE", "Cardiology", ""),
            row("S1", "Smith", "Ann", "Cardiology"),
        ];
        let roster = reduce_roster(&rows, &RosterOptions::default());

        assert_eq!(roster.surgeons.len(), 1);
        assert!(roster.best_practice.contains_owner("BP1"));
        assert_eq!(roster.best_practice.service_label("BP1"), Some("Cardiology"));
    }

    #[test]
    fn best_practice_owners_can_be_listed() {
        let rows = vec![
            row("BP1", "BEST PRACTICE", "Cardiology", ""),
            row("BP1", "BEST PRACTICE", "Cardiology", ""),
            row("S1", "Smith", "Ann", "Cardiology"),
        ];
        let options = RosterOptions {
            include_best_practice_owners: true,
            ..RosterOptions::default()
        };
        let roster = reduce_roster(&rows, &options);

        let keys: Vec<&str> = roster.surgeons.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["BP1", "S1"]);
        assert!(roster.best_practice.contains_owner("BP1"));
    }

    #[test]
    fn later_rule_replaces_service_label() {
        let rows = vec![
            row("BP1", "BEST PRACTICE", "Cardiology", ""),
            row("BP1", "BEST PRACTICE", "Cardiac Surgery", ""),
        ];
        let roster = reduce_roster(&rows, &RosterOptions::default());

        assert_eq!(roster.best_practice.len(), 1);
        assert_eq!(
            roster.best_practice.service_label("BP1"),
            Some("Cardiac Surgery")
        );
    }

    #[test]
    fn select_filters_by_key() {
        let rows = vec![row("S1", "Smith", "Ann", "A"), row("S2", "Jones", "Bob", "B")];
        let roster = reduce_roster(&rows, &RosterOptions::default());

        assert_eq!(roster.select(&[]).len(), 2);
        let selected = roster.select(&["S2".to_string()]);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key, "S2");
    }
}
