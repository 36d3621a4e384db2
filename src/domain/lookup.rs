//! Code tables mapping short codes to display names.
//!
//! Two tables are loaded alongside the records: food types and zones. Records refer
//! to entries by code, and a record may carry a code the table does not know about.
//! Lookups are therefore total: a missing, empty or unknown code resolves to the
//! table's fallback label instead of failing.

use super::record::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default fallback label for unknown food-type codes.
pub const UNKNOWN_FOOD: &str = "unknown";

/// Default fallback label for unknown zone codes.
pub const UNKNOWN_ZONE: &str = "unknown zone";

/// A `(code, display name)` pair as delivered by the code feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    #[serde(rename = "codeId", default, deserialize_with = "null_as_default")]
    pub code: String,

    /// May be empty; lookups then fall back like an unknown code.
    #[serde(rename = "codeNameCN", default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

impl CodeEntry {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// Lookup table built once from a code feed.
///
/// Entries keep their feed order for rendering filter choices; lookups go
/// through a hash index.
///
/// # Examples
///
/// ```
/// use dinescope::{CodeEntry, CodeTable};
///
/// let table = CodeTable::new(
///     vec![CodeEntry::new("F1", "Korean"), CodeEntry::new("F2", "Noodles")],
///     "unknown",
/// );
/// assert_eq!(table.name_of(Some("F2")), "Noodles");
/// assert_eq!(table.name_of(Some("F9")), "unknown");
/// assert_eq!(table.name_of(None), "unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    index: HashMap<String, usize>,
    fallback: String,
}

impl CodeTable {
    /// Builds a table from feed entries.
    ///
    /// When a code appears more than once the first occurrence wins and the
    /// duplicate is dropped with a warning.
    pub fn new(entries: Vec<CodeEntry>, fallback: impl Into<String>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(&entry.code) {
                tracing::warn!(code = %entry.code, "duplicate code in lookup table, keeping first");
                continue;
            }
            index.insert(entry.code.clone(), kept.len());
            kept.push(entry);
        }

        Self {
            entries: kept,
            index,
            fallback: fallback.into(),
        }
    }

    /// Creates an empty table that resolves every code to `fallback`.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self::new(Vec::new(), fallback)
    }

    /// Returns the display name for `code`, or the fallback label.
    #[must_use]
    pub fn name_of(&self, code: Option<&str>) -> &str {
        code.filter(|c| !c.is_empty())
            .and_then(|c| self.index.get(c))
            .map(|&i| self.entries[i].display_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.fallback.as_str())
    }

    /// Entries in feed order.
    #[must_use]
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Replaces the fallback label, keeping the entries.
    pub fn set_fallback(&mut self, fallback: impl Into<String>) {
        self.fallback = fallback.into();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
