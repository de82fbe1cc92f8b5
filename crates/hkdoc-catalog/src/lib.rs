#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod registry;

pub use crate::error::LoadError;
pub use crate::loader::{MappingSections, load_mapping, parse_mapping};
pub use crate::registry::{canonical_identifiers, identifier_prefix, verify_catalog};
