//! Data model shared by the support-table crates.
//!
//! The types here describe both inputs (the supported mapping decoded from
//! JSON) and the derived reconciliation output (classified rows and coverage
//! statistics). Nothing in this crate performs I/O.

pub mod category;
pub mod mapping;
pub mod report;

pub use category::{Category, Column, SupportStatus};
pub use mapping::{Coding, MappedUnit, SupportedEntry, SupportedMapping};
pub use report::{CategoryReport, ClassifiedRow, CoverageStat};
