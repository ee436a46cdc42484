//! Property tests for merge invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use listing_core::{BestPracticeRules, MergeEngine, derive_best_practice_service};
use listing_model::{
    BestPracticeRule, DirectCard, EntrySource, GroupExpansion, GroupedCard, ProcedureHint, Surgeon,
};

const OWNERS: &[&str] = &["S1", "S2", "BP1", "BP2"];
const SURGEON_KEYS: &[&str] = &["S1", "S2"];
const SERVICES: &[&str] = &["Cardiology", "Neurology", ""];
const CODES: &[&str] = &["A", "B", "C", "D", "E", "F"];
const GROUPS: &[&str] = &["G1", "G2", "G3"];

fn owner_label(owner: &str, service: &str) -> String {
    format!("{owner}, {service}")
}

fn direct_card() -> impl Strategy<Value = DirectCard> {
    (
        prop::sample::select(OWNERS),
        prop::sample::select(SERVICES),
        prop::sample::select(CODES),
        0u8..5,
    )
        .prop_map(|(owner, service, code, category)| DirectCard {
            category: category.to_string(),
            owner_key: owner.to_string(),
            owner_label: owner_label(owner, service),
            procedure_code: code.to_string(),
            procedure_description: format!("{code} by {owner}"),
        })
}

fn grouped_card() -> impl Strategy<Value = GroupedCard> {
    (
        prop::sample::select(OWNERS),
        prop::sample::select(SERVICES),
        prop::sample::select(GROUPS),
        0u8..5,
    )
        .prop_map(|(owner, service, group, category)| GroupedCard {
            category: category.to_string(),
            owner_key: owner.to_string(),
            owner_label: owner_label(owner, service),
            procedure_code: String::new(),
            group_description: group.to_string(),
        })
}

fn expansion() -> impl Strategy<Value = GroupExpansion> {
    (prop::sample::select(GROUPS), prop::sample::select(CODES)).prop_map(|(group, code)| {
        GroupExpansion {
            group_description: group.to_string(),
            procedure_code: code.to_string(),
            procedure_description: format!("{code} in {group}"),
        }
    })
}

fn rules() -> BestPracticeRules {
    ["BP1", "BP2"]
        .into_iter()
        .map(|owner| BestPracticeRule {
            owner_key: owner.to_string(),
            service_label: String::new(),
        })
        .collect()
}

fn surgeon(key: &str, service: &str) -> Surgeon {
    Surgeon {
        key: key.to_string(),
        last_name: key.to_string(),
        first_name: String::new(),
        service_line: service.to_string(),
    }
}

proptest! {
    #[test]
    fn merged_codes_are_unique(
        direct in prop::collection::vec(direct_card(), 0..12),
        grouped in prop::collection::vec(grouped_card(), 0..6),
        expansions in prop::collection::vec(expansion(), 0..10),
        key in prop::sample::select(OWNERS),
        service in prop::sample::select(SERVICES),
    ) {
        let rules = rules();
        let hints: Vec<ProcedureHint> = Vec::new();
        let engine = MergeEngine::new(&direct, &grouped, &expansions, &hints, &rules);
        let listing = engine.merge(&surgeon(key, service));

        let mut seen = HashSet::new();
        for entry in listing.entries() {
            prop_assert!(seen.insert(entry.procedure_code.clone()));
        }
    }

    #[test]
    fn merge_is_deterministic(
        direct in prop::collection::vec(direct_card(), 0..12),
        grouped in prop::collection::vec(grouped_card(), 0..6),
        expansions in prop::collection::vec(expansion(), 0..10),
        key in prop::sample::select(OWNERS),
        service in prop::sample::select(SERVICES),
    ) {
        let rules = rules();
        let hints: Vec<ProcedureHint> = Vec::new();
        let engine = MergeEngine::new(&direct, &grouped, &expansions, &hints, &rules);
        let s = surgeon(key, service);

        let first = engine.merge(&s).into_sorted_entries();
        let second = engine.merge(&s).into_sorted_entries();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn best_practice_entries_match_service(
        direct in prop::collection::vec(direct_card(), 0..12),
        grouped in prop::collection::vec(grouped_card(), 0..6),
        expansions in prop::collection::vec(expansion(), 0..10),
        key in prop::sample::select(SURGEON_KEYS),
        service in prop::sample::select(SERVICES),
    ) {
        let rules = rules();
        let hints: Vec<ProcedureHint> = Vec::new();
        let engine = MergeEngine::new(&direct, &grouped, &expansions, &hints, &rules);
        let listing = engine.merge(&surgeon(key, service));

        let applies = |owner_key: &str, owner_label: &str| {
            rules.contains_owner(owner_key) && derive_best_practice_service(owner_label) == service
        };
        for entry in listing.entries() {
            match entry.source {
                EntrySource::BestPracticeCard => {
                    let card = direct.iter().find(|c| {
                        c.procedure_code == entry.procedure_code
                            && applies(c.owner_key.as_str(), c.owner_label.as_str())
                    });
                    prop_assert!(card.is_some());
                }
                EntrySource::BestPracticeGroup => {
                    let card = grouped.iter().find(|g| {
                        applies(g.owner_key.as_str(), g.owner_label.as_str())
                            && expansions.iter().any(|e| {
                                e.group_description == g.group_description
                                    && e.procedure_code == entry.procedure_code
                            })
                    });
                    prop_assert!(card.is_some());
                }
                EntrySource::SurgeonCard | EntrySource::SurgeonGroup => {}
            }
        }
    }

    #[test]
    fn sorted_entries_are_stable_by_category(
        direct in prop::collection::vec(direct_card(), 0..12),
        key in prop::sample::select(OWNERS),
        service in prop::sample::select(SERVICES),
    ) {
        let rules = rules();
        let hints: Vec<ProcedureHint> = Vec::new();
        let engine = MergeEngine::new(&direct, &[], &[], &hints, &rules);
        let listing = engine.merge(&surgeon(key, service));
        let merge_order: Vec<String> = listing
            .entries()
            .iter()
            .map(|e| e.procedure_code.clone())
            .collect();
        let sorted = listing.into_sorted_entries();

        for pair in sorted.windows(2) {
            let a: i64 = pair[0].category.parse().unwrap();
            let b: i64 = pair[1].category.parse().unwrap();
            prop_assert!(a <= b);
            if a == b {
                let pos_a = merge_order.iter().position(|c| *c == pair[0].procedure_code);
                let pos_b = merge_order.iter().position(|c| *c == pair[1].procedure_code);
                prop_assert!(pos_a < pos_b);
            }
        }
    }
}
