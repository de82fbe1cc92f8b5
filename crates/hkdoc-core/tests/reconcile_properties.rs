//! Property tests for reconciliation invariants.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use hkdoc_core::reconcile;
use hkdoc_model::{Category, SupportedEntry};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,6}"
}

proptest! {
    #[test]
    fn every_identifier_appears_once_in_sorted_order(
        canonical in prop::collection::vec(identifier(), 0..24),
        supported in prop::collection::btree_set(identifier(), 0..12),
    ) {
        let canonical_refs: Vec<&str> = canonical.iter().map(String::as_str).collect();
        let mapping: BTreeMap<String, SupportedEntry> = supported
            .iter()
            .map(|id| (id.clone(), SupportedEntry::default()))
            .collect();

        let report = reconcile(Category::Quantity, &canonical_refs, &mapping);

        let union: BTreeSet<&str> = canonical_refs
            .iter()
            .copied()
            .chain(supported.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(report.rows.len(), union.len());
        prop_assert_eq!(report.coverage.total, report.rows.len());
        prop_assert_eq!(report.coverage.supported, supported.len());
        prop_assert_eq!(
            report.coverage.supported + report.coverage.unsupported(),
            report.coverage.total
        );
        prop_assert_eq!(report.supported_rows().count(), report.coverage.supported);
        prop_assert!(report
            .rows
            .windows(2)
            .all(|pair| pair[0].identifier < pair[1].identifier));
        for row in &report.rows {
            prop_assert_eq!(row.status.is_supported(), supported.contains(&row.identifier));
        }
    }
}
