//! Generator configuration.
//!
//! Every value has a built-in default matching the published HealthKitOnFHIR
//! documentation. A TOML file may override any top-level key; a category
//! table, when present, must be given in full:
//!
//! ```toml
//! output_dir = "docs"
//! placeholder = "—"
//!
//! [symbols]
//! supported = "✅"
//! unsupported = "❌"
//!
//! [categories.correlation]
//! heading = "HKCorrelationType"
//! prefix = "HKCorrelationTypeIdentifier"
//! section = "HKCorrelations"
//! file_name = "SupportedHKCorrelationTypes.md"
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hkdoc_catalog::MappingSections;
use hkdoc_catalog::registry::identifier_prefix;
use hkdoc_model::Category;

/// Default REUSE licence comment placed at the top of every document.
pub const DEFAULT_PREAMBLE: &str = "<!--

This source file is part of the HealthKitOnFHIR open source project

SPDX-FileCopyrightText: 2022 Stanford University and the project authors (see CONTRIBUTORS.md)

SPDX-License-Identifier: MIT

-->";

pub const HEALTHKIT_DOCUMENTATION_URL: &str = "https://developer.apple.com/documentation/healthkit";
pub const LOINC_URL: &str = "http://loinc.org";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file {path}: `{file_name}` is used for more than one document")]
    DuplicateFileName { path: PathBuf, file_name: String },
}

/// Glyphs rendered in the `Supported` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub supported: String,
    pub unsupported: String,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            supported: ":white_check_mark:".to_string(),
            unsupported: ":x:".to_string(),
        }
    }
}

/// Per-category presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Heading text, also used as the identifier column header.
    pub heading: String,
    /// Prefix stripped from identifiers for display.
    pub prefix: String,
    /// Top-level key of the mapping section. Ignored for clinical types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Output document file name, relative to the output directory.
    pub file_name: String,
}

impl CategorySettings {
    pub fn defaults_for(category: Category) -> Self {
        let (heading, section) = match category {
            Category::Quantity => ("HKQuantityType", Some("HKQuantitySamples")),
            Category::Correlation => ("HKCorrelationType", Some("HKCorrelations")),
            Category::Category => ("HKCategoryType", Some("HKCategorySamples")),
            Category::Clinical => ("HKClinicalType", None),
        };
        Self {
            heading: heading.to_string(),
            prefix: identifier_prefix(category).to_string(),
            section: section.map(str::to_string),
            file_name: format!("Supported{heading}s.md"),
        }
    }
}

/// Settings of every category, keyed by lowercase category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    #[serde(default = "quantity_defaults")]
    pub quantity: CategorySettings,
    #[serde(default = "correlation_defaults")]
    pub correlation: CategorySettings,
    #[serde(default = "category_defaults")]
    pub category: CategorySettings,
    #[serde(default = "clinical_defaults")]
    pub clinical: CategorySettings,
}

fn quantity_defaults() -> CategorySettings {
    CategorySettings::defaults_for(Category::Quantity)
}

fn correlation_defaults() -> CategorySettings {
    CategorySettings::defaults_for(Category::Correlation)
}

fn category_defaults() -> CategorySettings {
    CategorySettings::defaults_for(Category::Category)
}

fn clinical_defaults() -> CategorySettings {
    CategorySettings::defaults_for(Category::Clinical)
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            quantity: quantity_defaults(),
            correlation: correlation_defaults(),
            category: category_defaults(),
            clinical: clinical_defaults(),
        }
    }
}

impl CategoryTable {
    pub fn get(&self, category: Category) -> &CategorySettings {
        match category {
            Category::Quantity => &self.quantity,
            Category::Correlation => &self.correlation,
            Category::Category => &self.category,
            Category::Clinical => &self.clinical,
        }
    }
}

/// All tunables of a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Supported-mapping JSON file.
    pub mapping_path: PathBuf,
    /// Directory receiving every generated document.
    pub output_dir: PathBuf,
    /// Summary (table of contents) file name.
    pub summary_file: String,
    pub summary_title: String,
    /// Text placed before the title of every document. Empty disables it.
    pub preamble: String,
    /// Base URL identifiers are linked under.
    pub documentation_base_url: String,
    /// Code systems whose URLs accept the code appended as a path segment.
    pub code_path_authorities: Vec<String>,
    pub symbols: SymbolSet,
    /// Cell text for the code/unit of unsupported rows.
    pub placeholder: String,
    pub categories: CategoryTable,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mapping_path: PathBuf::from("Sources/HealthKitOnFHIR/Resources/HKSampleMapping.json"),
            output_dir: PathBuf::from("Documentation"),
            summary_file: "SupportedHKSampleTypes.md".to_string(),
            summary_title: "HKObject Support Table".to_string(),
            preamble: DEFAULT_PREAMBLE.to_string(),
            documentation_base_url: HEALTHKIT_DOCUMENTATION_URL.to_string(),
            code_path_authorities: vec![
                LOINC_URL.to_string(),
                HEALTHKIT_DOCUMENTATION_URL.to_string(),
            ],
            symbols: SymbolSet::default(),
            placeholder: "-".to_string(),
            categories: CategoryTable::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a TOML config file; unspecified keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Parse TOML config text. `path` is only used for error context.
    ///
    /// Every document must get its own file: category file names and the
    /// summary file name are checked for collisions.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(file_name) = config.duplicate_file_name() {
            return Err(ConfigError::DuplicateFileName {
                path: path.to_path_buf(),
                file_name: file_name.to_string(),
            });
        }
        Ok(config)
    }

    fn duplicate_file_name(&self) -> Option<&str> {
        let mut seen = BTreeSet::new();
        Category::ALL
            .iter()
            .map(|&category| self.category(category).file_name.as_str())
            .chain(std::iter::once(self.summary_file.as_str()))
            .find(|name| !seen.insert(*name))
    }

    pub fn category(&self, category: Category) -> &CategorySettings {
        self.categories.get(category)
    }

    /// Mapping sections to load: every mapped category with a configured section.
    pub fn mapping_sections(&self) -> MappingSections {
        Category::ALL
            .iter()
            .filter(|category| category.is_mapped())
            .fold(MappingSections::empty(), |sections, &category| {
                match &self.category(category).section {
                    Some(key) => sections.with_section(category, key.clone()),
                    None => sections,
                }
            })
    }

    #[must_use]
    pub fn with_mapping_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_path = path.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_category() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.category(Category::Quantity).file_name,
            "SupportedHKQuantityTypes.md"
        );
        assert_eq!(
            config.category(Category::Clinical).prefix,
            "HKClinicalTypeIdentifier"
        );
        assert!(config.category(Category::Clinical).section.is_none());
    }

    #[test]
    fn mapping_sections_skip_clinical() {
        let sections = GeneratorConfig::default().mapping_sections();
        assert_eq!(
            sections.iter().collect::<Vec<_>>(),
            vec![
                (Category::Quantity, "HKQuantitySamples"),
                (Category::Correlation, "HKCorrelations"),
                (Category::Category, "HKCategorySamples"),
            ]
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let text = r#"
            output_dir = "docs"

            [symbols]
            supported = "yes"
            unsupported = "no"

            [categories.correlation]
            heading = "Correlations"
            prefix = "HKCorrelationTypeIdentifier"
            section = "HKCorrelationSamples"
            file_name = "correlations.md"
        "#;
        let config = GeneratorConfig::from_toml_str(text, Path::new("hkdoc.toml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.symbols.supported, "yes");
        assert_eq!(config.category(Category::Correlation).heading, "Correlations");
        assert_eq!(
            config.category(Category::Quantity),
            &CategorySettings::defaults_for(Category::Quantity)
        );
        assert_eq!(config.placeholder, "-");
        assert!(
            config
                .mapping_sections()
                .iter()
                .any(|section| section == (Category::Correlation, "HKCorrelationSamples"))
        );
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let err = GeneratorConfig::from_toml_str("output_dir = [", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hkdoc.toml");
        std::fs::write(&path, "summary_title = \"Support\"\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.summary_title, "Support");

        let err = GeneratorConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn shared_file_names_are_rejected() {
        let clash = r#"
            [categories.clinical]
            heading = "HKClinicalType"
            prefix = "HKClinicalTypeIdentifier"
            file_name = "SupportedHKCategoryTypes.md"
        "#;
        let err = GeneratorConfig::from_toml_str(clash, Path::new("hkdoc.toml")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateFileName { ref file_name, .. } if file_name == "SupportedHKCategoryTypes.md"
        ));

        let summary_clash = r#"summary_file = "SupportedHKQuantityTypes.md""#;
        let err =
            GeneratorConfig::from_toml_str(summary_clash, Path::new("hkdoc.toml")).unwrap_err();
        assert!(err.to_string().contains("SupportedHKQuantityTypes.md"));
    }
}
