//! Support-table report generation.
//!
//! This crate turns reconciled category reports into Markdown documents:
//!
//! - **Links**: identifier, code and unit hyperlinks ([`LinkFormatter`])
//! - **Tables**: pipe-delimited tables with a coverage sentence
//! - **Documents**: one document per category plus a summary document
//! - **Output**: atomic writes and drift checks against existing files

mod document;
mod error;
mod link;
mod table;
mod write;

// Re-export public types and functions
pub use document::{Document, DocumentSet, assemble};
pub use error::{FormatError, WriteError};
pub use link::{LinkFormatter, markdown_link};
pub use table::{render_category, render_table};
pub use write::{check_documents, write_documents};
