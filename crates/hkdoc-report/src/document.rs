//! Document assembly.
//!
//! Every coverage sentence is computed once per category and embedded both in
//! that category's document and in the summary, so the two never disagree.

use tracing::debug;

use hkdoc_core::{CategorySettings, GeneratorConfig};
use hkdoc_model::{Category, CategoryReport, ClassifiedRow, Column};

use crate::error::FormatError;
use crate::link::{LinkFormatter, markdown_link};
use crate::table::render_category;

/// A rendered Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `None` for the summary document.
    pub category: Option<Category>,
    /// File name relative to the output directory.
    pub file_name: String,
    /// Coverage sentence of a category document; empty for the summary.
    pub coverage_sentence: String,
    pub contents: String,
}

/// Category documents in presentation order plus the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    pub documents: Vec<Document>,
    pub summary: Document,
}

impl DocumentSet {
    /// Category documents followed by the summary.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().chain(std::iter::once(&self.summary))
    }

    pub fn document(&self, category: Category) -> Option<&Document> {
        self.documents
            .iter()
            .find(|document| document.category == Some(category))
    }
}

/// Render all category documents and the summary.
///
/// Fails on the first supported entry that lacks a coding or unit its table
/// needs. Nothing is returned partially.
pub fn assemble(
    reports: &[CategoryReport],
    config: &GeneratorConfig,
) -> Result<DocumentSet, FormatError> {
    let formatter = LinkFormatter::from_config(config);
    let mut documents = Vec::with_capacity(reports.len());
    for category in Category::ALL {
        let Some(report) = reports.iter().find(|report| report.category == category) else {
            continue;
        };
        documents.push(category_document(report, config, &formatter)?);
    }
    let summary = summary_document(&documents, config);
    Ok(DocumentSet { documents, summary })
}

fn category_document(
    report: &CategoryReport,
    config: &GeneratorConfig,
    formatter: &LinkFormatter,
) -> Result<Document, FormatError> {
    let settings = config.category(report.category);
    let columns = report.category.columns();
    let headers: Vec<&str> = columns
        .iter()
        .map(|column| column.header().unwrap_or(settings.heading.as_str()))
        .collect();
    let rows = report
        .rows
        .iter()
        .map(|row| format_row(report.category, row, columns, settings, config, formatter))
        .collect::<Result<Vec<_>, _>>()?;

    let coverage_sentence = report.coverage.sentence(report.category.as_str());
    let body = render_category(&settings.heading, &coverage_sentence, &headers, &rows);
    debug!(category = %report.category, rows = rows.len(), "rendered category document");
    Ok(Document {
        category: Some(report.category),
        file_name: settings.file_name.clone(),
        contents: with_preamble(&config.preamble, &body),
        coverage_sentence,
    })
}

fn format_row(
    category: Category,
    row: &ClassifiedRow,
    columns: &[Column],
    settings: &CategorySettings,
    config: &GeneratorConfig,
    formatter: &LinkFormatter,
) -> Result<Vec<String>, FormatError> {
    columns
        .iter()
        .map(|column| match column {
            Column::Identifier => Ok(formatter.identifier_link(&row.identifier, &settings.prefix)),
            Column::Supported => Ok(if row.status.is_supported() {
                config.symbols.supported.clone()
            } else {
                config.symbols.unsupported.clone()
            }),
            Column::Code => match &row.entry {
                Some(entry) => formatter.code_link(category, &row.identifier, entry),
                None => Ok(config.placeholder.clone()),
            },
            Column::Unit => match &row.entry {
                Some(entry) => formatter.unit_link(category, &row.identifier, entry),
                None => Ok(config.placeholder.clone()),
            },
        })
        .collect()
}

fn summary_document(documents: &[Document], config: &GeneratorConfig) -> Document {
    let mut body = format!("# {}\n\n", config.summary_title);
    for document in documents {
        let Some(category) = document.category else {
            continue;
        };
        let heading = &config.category(category).heading;
        body.push_str(&format!(
            "- {}: {}\n",
            markdown_link(heading, &document.file_name),
            document.coverage_sentence
        ));
    }
    Document {
        category: None,
        file_name: config.summary_file.clone(),
        coverage_sentence: String::new(),
        contents: with_preamble(&config.preamble, &body),
    }
}

fn with_preamble(preamble: &str, body: &str) -> String {
    if preamble.is_empty() {
        body.to_string()
    } else {
        format!("{preamble}\n\n{body}")
    }
}
