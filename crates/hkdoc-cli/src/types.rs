use std::path::PathBuf;

use hkdoc_model::{Category, CoverageStat};

/// What a generate run did with the rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Write,
    DryRun,
    Check,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub mode: RunMode,
    pub mapping_path: PathBuf,
    pub output_dir: PathBuf,
    pub categories: Vec<CategorySummary>,
    pub summary_file: PathBuf,
    /// Files written (write mode only).
    pub written: Vec<PathBuf>,
    /// Files that differ from the rendered output (check mode only).
    pub stale: Vec<PathBuf>,
}

impl GenerateResult {
    /// True when a check run found out-of-date documents.
    pub fn has_drift(&self) -> bool {
        self.mode == RunMode::Check && !self.stale.is_empty()
    }
}

#[derive(Debug)]
pub struct CategorySummary {
    pub category: Category,
    pub heading: String,
    pub coverage: CoverageStat,
    pub document: PathBuf,
    pub uncatalogued: Vec<String>,
}
