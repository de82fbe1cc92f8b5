//! Type-safe enumerations for sample-type categories.
//!
//! HealthKit groups its sample types into families that each carry their own
//! identifier prefix (`HKQuantityTypeIdentifier...`, `HKCorrelationTypeIdentifier...`).
//! Each family gets its own support table with its own column schema.

use std::fmt;
use std::str::FromStr;

/// Sample-type category.
///
/// The declaration order is the fixed presentation order used by the summary
/// document and by every per-run iteration over categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Quantity samples (`HKQuantityType`), rendered with code and unit.
    Quantity,
    /// Correlation samples (`HKCorrelationType`), rendered with code only.
    Correlation,
    /// Category samples (`HKCategoryType`), rendered with status only.
    Category,
    /// Clinical records (`HKClinicalType`), always fully supported.
    Clinical,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 4] = [
        Category::Quantity,
        Category::Correlation,
        Category::Category,
        Category::Clinical,
    ];

    /// Lowercase label used in coverage sentences and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Quantity => "quantity",
            Category::Correlation => "correlation",
            Category::Category => "category",
            Category::Clinical => "clinical",
        }
    }

    /// Columns rendered for this category, in order.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Category::Quantity => &[
                Column::Identifier,
                Column::Supported,
                Column::Code,
                Column::Unit,
            ],
            Category::Correlation => &[Column::Identifier, Column::Supported, Column::Code],
            Category::Category | Category::Clinical => &[Column::Identifier, Column::Supported],
        }
    }

    /// Returns true when support is read from the mapping file.
    ///
    /// Clinical record types have no mapping section; every canonical
    /// clinical type is treated as supported.
    pub fn is_mapped(&self) -> bool {
        !matches!(self, Category::Clinical)
    }

    /// Returns true if rows of this category render a unit cell.
    pub fn has_unit(&self) -> bool {
        self.columns().contains(&Column::Unit)
    }

    /// Returns true if rows of this category render a code cell.
    pub fn has_code(&self) -> bool {
        self.columns().contains(&Column::Code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quantity" => Ok(Category::Quantity),
            "correlation" => Ok(Category::Correlation),
            "category" => Ok(Category::Category),
            "clinical" => Ok(Category::Clinical),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Table column kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Linked sample-type identifier; the header is the category heading.
    Identifier,
    /// Supported/unsupported glyph.
    Supported,
    /// Linked coding of the first mapped code.
    Code,
    /// Mapped unit, linked when it names a unit system.
    Unit,
}

impl Column {
    /// Fixed header text. `Identifier` has none; its header is the category heading.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Column::Identifier => None,
            Column::Supported => Some("Supported"),
            Column::Code => Some("Code"),
            Column::Unit => Some("Unit"),
        }
    }
}

/// Classification of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportStatus {
    Supported,
    Unsupported,
}

impl SupportStatus {
    pub fn is_supported(&self) -> bool {
        matches!(self, SupportStatus::Supported)
    }
}
