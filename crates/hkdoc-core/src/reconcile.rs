//! Merge the supported mapping with the canonical catalog.
//!
//! Every identifier in the union of both sets yields exactly one row. Rows are
//! sorted on the raw identifier so that link markup never influences order.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use hkdoc_model::{Category, CategoryReport, ClassifiedRow, CoverageStat, SupportedEntry};

/// Classify every identifier of `category`.
///
/// Supported identifiers missing from `canonical` still get a supported row
/// and are listed in [`CategoryReport::uncatalogued`]. Repeated canonical
/// entries collapse to one row.
pub fn reconcile(
    category: Category,
    canonical: &[&str],
    supported: &BTreeMap<String, SupportedEntry>,
) -> CategoryReport {
    let canonical_set: BTreeSet<&str> = canonical.iter().copied().collect();
    if canonical_set.len() != canonical.len() {
        warn!(
            %category,
            listed = canonical.len(),
            unique = canonical_set.len(),
            "canonical list contains duplicate identifiers"
        );
    }

    let mut rows = Vec::with_capacity(canonical_set.len() + supported.len());
    let mut uncatalogued = Vec::new();
    for (identifier, entry) in supported {
        if !canonical_set.contains(identifier.as_str()) {
            warn!(%category, identifier = %identifier, "supported identifier is not in the catalog");
            uncatalogued.push(identifier.clone());
        }
        rows.push(ClassifiedRow::supported(identifier.clone(), Some(entry.clone())));
    }
    for identifier in &canonical_set {
        if !supported.contains_key(*identifier) {
            rows.push(ClassifiedRow::unsupported(*identifier));
        }
    }
    rows.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    let coverage = CoverageStat {
        supported: supported.len(),
        total: rows.len(),
    };
    debug!(
        %category,
        supported = coverage.supported,
        total = coverage.total,
        "reconciled category"
    );
    CategoryReport {
        category,
        rows,
        coverage,
        uncatalogued,
    }
}

/// Classify a category whose canonical set is wholly supported.
///
/// Used for clinical record types, which have no mapping section.
pub fn reconcile_fixed(category: Category, canonical: &[&str]) -> CategoryReport {
    let unique: BTreeSet<&str> = canonical.iter().copied().collect();
    let rows: Vec<ClassifiedRow> = unique
        .into_iter()
        .map(|identifier| ClassifiedRow::supported(identifier, None))
        .collect();
    let coverage = CoverageStat {
        supported: rows.len(),
        total: rows.len(),
    };
    CategoryReport {
        category,
        rows,
        coverage,
        uncatalogued: Vec::new(),
    }
}
