//! CLI library components for the support-table generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
