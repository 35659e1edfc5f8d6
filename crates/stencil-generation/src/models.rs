//! Data models for file generation

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Substitution data for one generation call
///
/// Maps placeholder names to replacement text. Keys are unique and iteration
/// order is by key, so output never depends on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateData {
    values: BTreeMap<String, String>,
}

impl TemplateData {
    /// Create empty substitution data
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, stringifying it
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, replacing any previous value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    /// Look up the value for a placeholder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Check whether a placeholder name has a value
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Placeholder names with values
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for TemplateData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = TemplateData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

impl From<HashMap<String, String>> for TemplateData {
    fn from(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}

/// How rendering treats placeholders that have no value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderPolicy {
    /// Leave the `$NAME$` token in the output unchanged
    #[default]
    Preserve,
    /// Fail with `MissingPlaceholder` on the first unmatched token
    Strict,
}

/// A file produced by the generation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Destination the content was written to
    pub path: PathBuf,
    /// Size of the rendered content in bytes
    pub bytes_written: usize,
    /// Whether this was a preview that wrote nothing
    pub dry_run: bool,
}
