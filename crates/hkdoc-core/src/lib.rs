//! Reconciliation of supported sample types against the canonical catalog.
//!
//! [`config::GeneratorConfig`] carries every tunable of a generator run;
//! [`reconcile`] classifies one category; [`pipeline::build_reports`] runs
//! reconciliation for every category in presentation order.

pub mod config;
pub mod pipeline;
pub mod reconcile;

pub use config::{CategorySettings, ConfigError, GeneratorConfig, SymbolSet};
pub use pipeline::build_reports;
pub use reconcile::{reconcile, reconcile_fixed};
