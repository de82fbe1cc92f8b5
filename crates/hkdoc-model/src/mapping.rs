//! Supported-mapping records as decoded from the sample mapping JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A (code, system) pair referencing an external terminology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub code: String,
    pub system: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Unit a quantity sample is reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedUnit {
    pub unit: String,
    /// Unit system (e.g. UCUM). Some units are not drawn from a code system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// Mapping entry for one supported identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedEntry {
    #[serde(default)]
    pub codings: Vec<Coding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<MappedUnit>,
}

impl SupportedEntry {
    /// The coding used for rendering. Only the first coding is displayed.
    pub fn primary_coding(&self) -> Option<&Coding> {
        self.codings.first()
    }
}

/// Supported entries per category, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedMapping {
    sections: BTreeMap<Category, BTreeMap<String, SupportedEntry>>,
}

impl SupportedMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the entries of one category.
    pub fn insert_section(
        &mut self,
        category: Category,
        entries: BTreeMap<String, SupportedEntry>,
    ) {
        self.sections.insert(category, entries);
    }

    /// Entries of a category, if a section was loaded for it.
    pub fn section(&self, category: Category) -> Option<&BTreeMap<String, SupportedEntry>> {
        self.sections.get(&category)
    }

    /// Total number of supported entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }
}
