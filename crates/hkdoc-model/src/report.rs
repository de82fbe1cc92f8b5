use crate::category::{Category, SupportStatus};
use crate::mapping::SupportedEntry;

/// One reconciled identifier, before any display formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRow {
    /// Raw identifier, e.g. `HKQuantityTypeIdentifierHeartRate`.
    pub identifier: String,
    pub status: SupportStatus,
    /// Mapping entry for supported rows of mapped categories.
    pub entry: Option<SupportedEntry>,
}

impl ClassifiedRow {
    pub fn supported(identifier: impl Into<String>, entry: Option<SupportedEntry>) -> Self {
        Self {
            identifier: identifier.into(),
            status: SupportStatus::Supported,
            entry,
        }
    }

    pub fn unsupported(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            status: SupportStatus::Unsupported,
            entry: None,
        }
    }
}

/// Supported versus total identifiers of one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageStat {
    pub supported: usize,
    pub total: usize,
}

impl CoverageStat {
    pub fn unsupported(&self) -> usize {
        self.total.saturating_sub(self.supported)
    }

    /// Share of supported identifiers in percent (0 when the category is empty).
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.supported as f64 * 100.0 / self.total as f64
        }
    }

    /// Coverage sentence, e.g. `"40 of 79 quantity types supported."`.
    pub fn sentence(&self, label: &str) -> String {
        format!(
            "{} of {} {} types supported.",
            self.supported, self.total, label
        )
    }
}

/// Reconciliation result for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub category: Category,
    /// Rows sorted by raw identifier.
    pub rows: Vec<ClassifiedRow>,
    pub coverage: CoverageStat,
    /// Supported identifiers that are missing from the canonical catalog.
    pub uncatalogued: Vec<String>,
}

impl CategoryReport {
    pub fn supported_rows(&self) -> impl Iterator<Item = &ClassifiedRow> {
        self.rows.iter().filter(|row| row.status.is_supported())
    }

    pub fn unsupported_rows(&self) -> impl Iterator<Item = &ClassifiedRow> {
        self.rows.iter().filter(|row| !row.status.is_supported())
    }
}
