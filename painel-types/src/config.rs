//! Configuration types shared by the orchestrator and the cache.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Time zone every calendar window is evaluated in unless overridden.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Configuration for the single-slot snapshot cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of a cached snapshot in milliseconds. `0` disables caching.
    pub ttl_ms: u64,
}

impl CacheConfig {
    /// Effective TTL, or `None` when caching is disabled.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        if self.ttl_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.ttl_ms))
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_ms: 300_000 }
    }
}

/// Column names used to read the raw rows of each table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    /// Sales: day-first timestamp column.
    pub sale_timestamp: String,
    /// Sales: monetary value column.
    pub sale_value: String,
    /// Sales: delimited list of items (flavors) sold in the transaction.
    pub sale_items: String,
    /// Expenses: day-first timestamp column.
    pub expense_timestamp: String,
    /// Expenses: monetary value column.
    pub expense_value: String,
    /// Expenses: description/product column.
    pub expense_description: String,
    /// Expenses: optional quantity column.
    pub expense_quantity: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            sale_timestamp: "DATA E HORA".into(),
            sale_value: "VALOR DA VENDA".into(),
            sale_items: "SABORES".into(),
            expense_timestamp: "DATA E HORA".into(),
            expense_value: "VALOR".into(),
            expense_description: "ITEM".into(),
            expense_quantity: "QUANTIDADE".into(),
        }
    }
}

impl ColumnMap {
    /// Returns the name of the first column whose header is blank, if any.
    #[must_use]
    pub fn first_blank(&self) -> Option<&'static str> {
        [
            ("sale_timestamp", &self.sale_timestamp),
            ("sale_value", &self.sale_value),
            ("sale_items", &self.sale_items),
            ("expense_timestamp", &self.expense_timestamp),
            ("expense_value", &self.expense_value),
            ("expense_description", &self.expense_description),
            ("expense_quantity", &self.expense_quantity),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
    }
}

/// Global settings for building dashboard snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainelConfig {
    /// Zone the "today" and "month-to-date" windows are computed in.
    pub timezone: Tz,
    /// Snapshot cache settings.
    pub cache: CacheConfig,
    /// Maximum number of rows in each ranking.
    pub ranking_limit: usize,
    /// Number of entries in the recent sales list.
    pub recent_limit: usize,
    /// Separator of the multi-value item field.
    pub item_separator: char,
    /// Column names of the upstream tables.
    pub columns: ColumnMap,
}

impl Default for PainelConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            cache: CacheConfig::default(),
            ranking_limit: 10,
            recent_limit: 5,
            item_separator: ',',
            columns: ColumnMap::default(),
        }
    }
}
