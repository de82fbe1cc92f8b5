//! Markdown link composition for identifiers, codes and units.

use hkdoc_core::GeneratorConfig;
use hkdoc_model::{Category, SupportedEntry};

use crate::error::FormatError;

/// `[text](url)`.
pub fn markdown_link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Builds the link cells of a table row.
#[derive(Debug, Clone)]
pub struct LinkFormatter {
    documentation_base: String,
    code_path_authorities: Vec<String>,
}

impl LinkFormatter {
    pub fn new(documentation_base: impl Into<String>, code_path_authorities: Vec<String>) -> Self {
        Self {
            documentation_base: documentation_base.into(),
            code_path_authorities,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.documentation_base_url.clone(),
            config.code_path_authorities.clone(),
        )
    }

    /// Link the first coding of `entry`.
    ///
    /// Known authorities resolve `system/code`; any other system is linked as is.
    pub fn code_link(
        &self,
        category: Category,
        identifier: &str,
        entry: &SupportedEntry,
    ) -> Result<String, FormatError> {
        let coding = entry
            .primary_coding()
            .ok_or_else(|| FormatError::MissingCoding {
                category,
                identifier: identifier.to_string(),
            })?;
        let url = if self.appends_code(&coding.system) {
            format!("{}/{}", coding.system.trim_end_matches('/'), coding.code)
        } else {
            coding.system.clone()
        };
        Ok(markdown_link(&coding.code, &url))
    }

    /// Link the unit of `entry` to its unit system, or render it bare.
    pub fn unit_link(
        &self,
        category: Category,
        identifier: &str,
        entry: &SupportedEntry,
    ) -> Result<String, FormatError> {
        let unit = entry.unit.as_ref().ok_or_else(|| FormatError::MissingUnit {
            category,
            identifier: identifier.to_string(),
        })?;
        Ok(match &unit.system {
            Some(system) => markdown_link(&unit.unit, system),
            None => unit.unit.clone(),
        })
    }

    /// Link an identifier to its documentation page, displaying it without `prefix`.
    pub fn identifier_link(&self, identifier: &str, prefix: &str) -> String {
        let display = identifier.strip_prefix(prefix).unwrap_or(identifier);
        let url = format!(
            "{}/{}",
            self.documentation_base.trim_end_matches('/'),
            identifier
        );
        markdown_link(display, &url)
    }

    fn appends_code(&self, system: &str) -> bool {
        let system = system.trim_end_matches('/');
        self.code_path_authorities
            .iter()
            .any(|authority| authority.trim_end_matches('/') == system)
    }
}
