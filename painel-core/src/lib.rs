//! painel-core
//!
//! The cleaning and aggregation engine shared across the painel workspace.
//!
//! - `source`: the `RecordSource` trait upstream feeds implement, and `RawRecord`.
//! - `money`: total parsing of malformed monetary text.
//! - `temporal`: day-first timestamps, the per-build reference instant and its windows.
//! - `explode`: value-preserving expansion of multi-value item cells.
//! - `aggregate`: grouping, percentages, stable rankings and recency views.
//! - `records`: raw rows to cleaned sales and expenses.
//!
//! Nothing in this crate fails on bad cells: monetary text falls back to `0.0` and
//! timestamps to `None`. Only sources return errors.
#![warn(missing_docs)]

/// Grouping, percentage, ranking and recency helpers.
pub mod aggregate;
/// Clock abstraction sampled once per build.
pub mod clock;
/// Multi-value field explosion with proportional attribution.
pub mod explode;
/// Monetary text parsing.
pub mod money;
/// Cleaning of raw rows into typed sales and expenses.
pub mod records;
/// Record source trait and raw row type.
pub mod source;
/// Timestamp parsing and calendar windows.
pub mod temporal;

pub use aggregate::{
    AggregateRow, Measure, Metric, RecencyKey, aggregate, aggregate_measured, most_recent,
    normalize_key, percentage, rank, round2, with_percentages, with_percentages_of,
};
pub use clock::{Clock, SystemClock};
pub use explode::{ExplodedItem, explode, split_items};
pub use money::{parse_money, parse_quantity};
pub use records::{CleanExpense, CleanSale, clean_expenses, clean_sales};
pub use source::{RawRecord, RecordSource};
pub use temporal::{ReferenceInstant, Window, parse_day_first};

pub use painel_types::*;
