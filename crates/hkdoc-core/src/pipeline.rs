use std::collections::BTreeMap;

use tracing::{info, info_span, warn};

use hkdoc_catalog::canonical_identifiers;
use hkdoc_model::{Category, CategoryReport, SupportedMapping};

use crate::reconcile::{reconcile, reconcile_fixed};

/// Reconcile every category, in [`Category::ALL`] order.
///
/// A mapped category without a loaded section is reconciled against an empty
/// mapping, so all of its canonical identifiers come out unsupported.
pub fn build_reports(mapping: &SupportedMapping) -> Vec<CategoryReport> {
    let empty = BTreeMap::new();
    Category::ALL
        .iter()
        .map(|&category| {
            let span = info_span!("category", category = %category);
            let _guard = span.enter();
            let canonical = canonical_identifiers(category);
            let report = if category.is_mapped() {
                let supported = mapping.section(category).unwrap_or_else(|| {
                    warn!("no mapping section loaded; treating category as unsupported");
                    &empty
                });
                reconcile(category, canonical, supported)
            } else {
                reconcile_fixed(category, canonical)
            };
            info!(
                supported = report.coverage.supported,
                total = report.coverage.total,
                uncatalogued = report.uncatalogued.len(),
                "category reconciled"
            );
            report
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hkdoc_model::SupportedEntry;

    #[test]
    fn reports_follow_presentation_order() {
        let reports = build_reports(&SupportedMapping::new());
        let categories: Vec<_> = reports.iter().map(|report| report.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn clinical_is_fully_supported_without_mapping() {
        let reports = build_reports(&SupportedMapping::new());
        let clinical = &reports[3];
        assert_eq!(clinical.coverage.supported, clinical.coverage.total);
        assert_eq!(
            clinical.coverage.total,
            canonical_identifiers(Category::Clinical).len()
        );
    }

    #[test]
    fn mapped_section_is_used() {
        let mut mapping = SupportedMapping::new();
        let mut correlations = BTreeMap::new();
        correlations.insert(
            "HKCorrelationTypeIdentifierFood".to_string(),
            SupportedEntry::default(),
        );
        mapping.insert_section(Category::Correlation, correlations);

        let reports = build_reports(&mapping);

        assert_eq!(reports[1].coverage.supported, 1);
        assert_eq!(reports[1].coverage.total, 2);
        assert_eq!(reports[0].coverage.supported, 0);
    }
}
