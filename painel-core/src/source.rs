use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{PainelError, Table};

/// One row exactly as delivered by a record source: column header to cell text.
///
/// Sources that receive typed cells (numbers, booleans) render them as text; the
/// cleaning layer does all interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, cell)` pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Set a cell, returning the row for chaining.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, cell: impl Into<String>) -> Self {
        self.0.insert(column.into(), cell.into());
        self
    }

    /// Cell text for the column, if the column exists on this row.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An upstream feed of tabular records (e.g. a spreadsheet with one worksheet per table).
///
/// Implementations fetch every row of the requested table in source order. They must
/// not retry or cache: the orchestrator reports a failure once per call and owns caching.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// A stable identifier used in error messages and logs (e.g. "painel-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch all rows of `table`, in source order.
    ///
    /// # Errors
    /// Returns `PainelError::TableNotFound` when the table does not exist, and
    /// `PainelError::Source` / `PainelError::MissingConfig` for transport or credential problems.
    async fn fetch(&self, table: Table) -> Result<Vec<RawRecord>, PainelError>;
}
