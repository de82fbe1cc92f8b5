use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hkdoc_model::CoverageStat;

use crate::types::{CategorySummary, GenerateResult, RunMode};

pub fn print_summary(result: &GenerateResult) {
    println!("Mapping: {}", result.mapping_path.display());
    println!("Output: {}", result.output_dir.display());
    if result.mode == RunMode::DryRun {
        println!("Dry run: no files written");
    }
    println!("{}", summary_table(result));

    for summary in &result.categories {
        for identifier in &summary.uncatalogued {
            eprintln!(
                "warning: {identifier} is supported but missing from the {} catalog",
                summary.category
            );
        }
    }
    match result.mode {
        RunMode::Write => {
            println!("Summary: {}", result.summary_file.display());
            println!("Wrote {} documents", result.written.len());
        }
        RunMode::Check if result.stale.is_empty() => {
            println!("All documents are up to date");
        }
        RunMode::Check => {
            eprintln!("Out of date:");
            for path in &result.stale {
                eprintln!("- {}", path.display());
            }
        }
        RunMode::DryRun => {}
    }
}

/// Per-category coverage table with a totals row.
pub fn summary_table(result: &GenerateResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Heading"),
        header_cell("Supported"),
        header_cell("Unsupported"),
        header_cell("Total"),
        header_cell("Coverage"),
        header_cell("Document"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut overall = CoverageStat::default();
    for summary in &result.categories {
        overall.supported += summary.coverage.supported;
        overall.total += summary.coverage.total;
        table.add_row(category_row(summary));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(overall.supported).add_attribute(Attribute::Bold),
        Cell::new(overall.unsupported()).add_attribute(Attribute::Bold),
        Cell::new(overall.total).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", overall.percent())).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn category_row(summary: &CategorySummary) -> Vec<Cell> {
    let coverage = summary.coverage;
    let document = summary
        .document
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    vec![
        Cell::new(summary.category.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&summary.heading),
        Cell::new(coverage.supported).fg(Color::Green),
        count_cell(coverage.unsupported(), Color::Yellow),
        Cell::new(coverage.total),
        Cell::new(format!("{:.1}%", coverage.percent())),
        Cell::new(document),
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
