//! Host table contract
//!
//! The host hands the visual a tabular dataset: two row-aligned category
//! columns (day-of-week labels, hour-of-day labels) and any number of
//! measure columns, each tagged with role names. Which measure feeds the
//! grid is decided by role lookup, never by column position — the host may
//! reorder measures between updates.

use serde::{Deserialize, Serialize};

/// Opaque host-issued row identity.
///
/// Stable per underlying table row across updates; selection persistence
/// keys off identity equality, never off cell values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// One category column: row-aligned labels plus the host identity for each
/// row. Only the day column's identities are used to key selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryColumn {
    pub name: String,
    pub values: Vec<String>,
    pub identities: Vec<Identity>,
}

impl CategoryColumn {
    pub fn new(
        name: impl Into<String>,
        values: Vec<String>,
        identities: Vec<Identity>,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            identities,
        }
    }
}

/// One measure column with its declared roles, per-row values, and the
/// optional cross-filter highlight sub-values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasureColumn {
    pub name: String,
    pub roles: Vec<String>,
    pub values: Vec<Option<f64>>,
    /// Present only while a cross-filter highlight is active.
    pub highlights: Option<Vec<Option<f64>>>,
}

impl MeasureColumn {
    pub fn new(name: impl Into<String>, roles: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            roles,
            values,
            highlights: None,
        }
    }

    pub fn with_highlights(mut self, highlights: Vec<Option<f64>>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn value(&self, row: usize) -> Option<f64> {
        self.values.get(row).copied().flatten()
    }

    pub fn highlight(&self, row: usize) -> Option<f64> {
        self.highlights
            .as_ref()
            .and_then(|h| h.get(row).copied().flatten())
    }
}

/// The full dataset for one update: category columns positional
/// (day first, hour second), measures role-tagged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTable {
    pub categories: Vec<CategoryColumn>,
    pub measures: Vec<MeasureColumn>,
}

impl DataTable {
    pub fn new(categories: Vec<CategoryColumn>, measures: Vec<MeasureColumn>) -> Self {
        Self {
            categories,
            measures,
        }
    }
}
