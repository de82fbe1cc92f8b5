use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use hkdoc_catalog::{canonical_identifiers, load_mapping, verify_catalog};
use hkdoc_core::{GeneratorConfig, build_reports};
use hkdoc_model::Category;
use hkdoc_report::{assemble, check_documents, write_documents};

use crate::cli::{CatalogArgs, GenerateArgs};
use crate::summary::apply_table_style;
use crate::types::{CategorySummary, GenerateResult, RunMode};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = resolve_config(args)?;
    let mode = if args.check {
        RunMode::Check
    } else if args.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Write
    };
    let run_span = info_span!("generate", mapping = %config.mapping_path.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    // Load
    let mapping = load_mapping(&config.mapping_path, &config.mapping_sections())
        .with_context(|| format!("load mapping {}", config.mapping_path.display()))?;
    info!(entries = mapping.entry_count(), "loaded sample mapping");

    // Reconcile and render entirely in memory before touching the output directory
    let reports = build_reports(&mapping);
    let documents = assemble(&reports, &config).context("render support tables")?;

    let (written, stale) = match mode {
        RunMode::Write => (
            write_documents(&documents, &config.output_dir).context("write support tables")?,
            Vec::new(),
        ),
        RunMode::Check => (
            Vec::new(),
            check_documents(&documents, &config.output_dir).context("check support tables")?,
        ),
        RunMode::DryRun => (Vec::new(), Vec::new()),
    };
    for path in &stale {
        warn!(path = %path.display(), "support table is out of date");
    }

    let categories = reports
        .iter()
        .map(|report| {
            let settings = config.category(report.category);
            CategorySummary {
                category: report.category,
                heading: settings.heading.clone(),
                coverage: report.coverage,
                document: config.output_dir.join(&settings.file_name),
                uncatalogued: report.uncatalogued.clone(),
            }
        })
        .collect();
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "generation finished");

    Ok(GenerateResult {
        mode,
        mapping_path: config.mapping_path.clone(),
        output_dir: config.output_dir.clone(),
        summary_file: config.output_dir.join(&config.summary_file),
        categories,
        written,
        stale,
    })
}

/// Print the catalog; returns false when a list has duplicates or malformed entries.
pub fn run_catalog(args: &CatalogArgs) -> Result<bool> {
    let selected: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Category", "Identifier"]);
    apply_table_style(&mut table);
    for &category in &selected {
        for identifier in canonical_identifiers(category) {
            table.add_row(vec![category.as_str(), identifier]);
        }
    }
    println!("{table}");

    let mut clean = true;
    for issues in verify_catalog()
        .into_iter()
        .filter(|issues| selected.contains(&issues.category))
    {
        for duplicate in &issues.duplicates {
            eprintln!("{}: duplicate identifier {duplicate}", issues.category);
            clean = false;
        }
        for malformed in &issues.malformed {
            eprintln!("{}: malformed identifier {malformed}", issues.category);
            clean = false;
        }
    }
    Ok(clean)
}

fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(mapping) = &args.mapping {
        config = config.with_mapping_path(mapping);
    }
    if let Some(output_dir) = &args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    Ok(config)
}
