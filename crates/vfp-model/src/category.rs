//! Train-time learned categorical value tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from a categorical feature name to its retained values.
///
/// Learned once at train time (top-N most frequent values, with the
/// catch-all sentinel appended when the column had more distinct values
/// than were retained) and persisted inside the model artifact. At
/// predict time the table is read-only: it is replayed, never
/// regenerated from the input data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    tables: BTreeMap<String, Vec<String>>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the retained values for a feature, in learned order.
    pub fn insert(&mut self, feature: impl Into<String>, values: Vec<String>) {
        self.tables.insert(feature.into(), values);
    }

    /// Retained values for a feature, in learned order.
    pub fn get(&self, feature: &str) -> Option<&[String]> {
        self.tables.get(feature).map(Vec::as_slice)
    }

    pub fn contains_feature(&self, feature: &str) -> bool {
        self.tables.contains_key(feature)
    }

    /// Feature names with a learned value set.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// All indicator column names this table produces, named
    /// `<feature>_<value>`.
    pub fn indicator_columns(&self) -> Vec<String> {
        let mut columns = Vec::new();
        for (feature, values) in &self.tables {
            for value in values {
                columns.push(format!("{feature}_{value}"));
            }
        }
        columns
    }
}
