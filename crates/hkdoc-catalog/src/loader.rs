//! Loader for the sample mapping JSON.
//!
//! The mapping file is a single JSON object with one top-level section per
//! mapped category. Each section maps an identifier to its codings and, for
//! quantity samples, its unit:
//!
//! ```json
//! {
//!   "HKQuantitySamples": {
//!     "HKQuantityTypeIdentifierHeartRate": {
//!       "codings": [{"code": "8867-4", "display": "Heart rate", "system": "http://loinc.org"}],
//!       "unit": {"unit": "beats/minute", "system": "http://unitsofmeasure.org"}
//!     }
//!   }
//! }
//! ```
//!
//! Identifier spelling is not checked here; reconciliation handles that.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use hkdoc_model::{Category, SupportedEntry, SupportedMapping};

use crate::error::LoadError;

/// Top-level JSON key of each mapped category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSections {
    keys: BTreeMap<Category, String>,
}

impl Default for MappingSections {
    fn default() -> Self {
        let mut keys = BTreeMap::new();
        keys.insert(Category::Quantity, "HKQuantitySamples".to_string());
        keys.insert(Category::Correlation, "HKCorrelations".to_string());
        keys.insert(Category::Category, "HKCategorySamples".to_string());
        Self { keys }
    }
}

impl MappingSections {
    /// No sections; add them with [`MappingSections::with_section`].
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, category: Category, key: impl Into<String>) -> Self {
        self.keys.insert(category, key.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.keys.iter().map(|(category, key)| (*category, key.as_str()))
    }
}

/// Read and decode the mapping file at `path`.
pub fn load_mapping(path: &Path, sections: &MappingSections) -> Result<SupportedMapping, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::io(path, source))?;
    parse_mapping(&text, path, sections)
}

/// Decode mapping JSON. `path` is only used for error context.
pub fn parse_mapping(
    text: &str,
    path: &Path,
    sections: &MappingSections,
) -> Result<SupportedMapping, LoadError> {
    let mut root: Map<String, Value> =
        serde_json::from_str(text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut mapping = SupportedMapping::new();
    for (category, key) in sections.iter() {
        let section = root.remove(key).ok_or_else(|| LoadError::MissingSection {
            path: path.to_path_buf(),
            section: key.to_string(),
        })?;
        let entries = parse_section(section, path, key)?;
        debug!(%category, section = key, entries = entries.len(), "loaded mapping section");
        mapping.insert_section(category, entries);
    }
    Ok(mapping)
}

fn parse_section(
    section: Value,
    path: &Path,
    key: &str,
) -> Result<BTreeMap<String, SupportedEntry>, LoadError> {
    let raw: Map<String, Value> =
        serde_json::from_value(section).map_err(|source| LoadError::InvalidSection {
            path: path.to_path_buf(),
            section: key.to_string(),
            source,
        })?;

    let mut entries = BTreeMap::new();
    for (identifier, value) in raw {
        let entry: SupportedEntry =
            serde_json::from_value(value).map_err(|source| LoadError::InvalidEntry {
                path: path.to_path_buf(),
                section: key.to_string(),
                identifier: identifier.clone(),
                source,
            })?;
        entries.insert(identifier, entry);
    }
    Ok(entries)
}
