//! Configuration types for counting and result presentation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Per-classification configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    /// Whether documentation strings (e.g. Python docstrings) count as
    /// documentation comments. When disabled they count as code, like any
    /// other string literal.
    pub count_doc_strings: bool,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            count_doc_strings: true,
        }
    }
}

impl CountConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set whether doc strings count as documentation.
    pub fn with_doc_strings(mut self, enable: bool) -> Self {
        self.count_doc_strings = enable;
        self
    }
}

/// Field to order report rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Order by code line count (the default presentation).
    #[default]
    Code,
    /// Order by language name.
    Name,
    /// Order by total line count.
    Total,
    /// Order by file count.
    Files,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(OrderBy::Code),
            "name" | "language" => Ok(OrderBy::Name),
            "total" | "lines" => Ok(OrderBy::Total),
            "files" => Ok(OrderBy::Files),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Largest first.
    #[default]
    Descending,
    /// Smallest first (A-Z for names).
    Ascending,
}

/// Ordering of report rows.
///
/// The default — code lines descending, ties broken by language name
/// ascending — is a presentation policy, not a correctness requirement,
/// and any other ordering can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    /// Field to order by.
    pub by: OrderBy,
    /// Sort direction.
    pub direction: OrderDirection,
}

impl Default for Ordering {
    fn default() -> Self {
        Self::by_code()
    }
}

impl Ordering {
    /// Order by code lines, descending (the default).
    pub fn by_code() -> Self {
        Self {
            by: OrderBy::Code,
            direction: OrderDirection::Descending,
        }
    }

    /// Order by language name, ascending.
    pub fn by_name() -> Self {
        Self {
            by: OrderBy::Name,
            direction: OrderDirection::Ascending,
        }
    }

    /// Order by total lines, descending.
    pub fn by_total() -> Self {
        Self {
            by: OrderBy::Total,
            direction: OrderDirection::Descending,
        }
    }

    /// Order by file count, descending.
    pub fn by_files() -> Self {
        Self {
            by: OrderBy::Files,
            direction: OrderDirection::Descending,
        }
    }

    /// Set sort direction to ascending.
    pub fn ascending(mut self) -> Self {
        self.direction = OrderDirection::Ascending;
        self
    }

    /// Set sort direction to descending.
    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Descending;
        self
    }
}
