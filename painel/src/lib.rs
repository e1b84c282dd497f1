//! Painel turns two operator-maintained tables into a live KPI snapshot.
//!
//! Overview
//! - Fetches the sales (`vendas`) and expenses (`gastos`) tables from a `RecordSource`.
//! - Cleans malformed cells: glued or localized monetary text, day-first timestamps,
//!   inconsistent casing of grouping keys.
//! - Computes today and month-to-date totals in a configured timezone, item rankings
//!   by revenue and by volume, an expense ranking and the most recent sales.
//! - Memoizes the last snapshot for a configurable TTL and exposes it as a status
//!   payload that never fails: errors become `{"erro": "..."}`.
//!
//! Key behaviors and trade-offs
//! - Multi-item sales are attributed proportionally: a sale of `N` items credits
//!   `value / N` to each, and per-sale shares always add up to the sale value.
//! - Windows are derived from one reference instant sampled per build, so a build
//!   that straddles midnight never mixes two "todays".
//! - The cache is a plain get/put: concurrent misses each rebuild and the last write
//!   wins. Failed builds are never stored.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use painel::Painel;
//!
//! let painel = Painel::builder()
//!     .with_source(Arc::new(painel_mock::MockSource::new()))
//!     .build()?;
//! let status = painel.status().await;
//! println!("{}", serde_json::to_string_pretty(&status)?);
//! ```
//!
//! See `painel/examples/` for a runnable demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
/// Snapshot assembly from raw table rows.
pub mod snapshot;

pub use core::{Painel, PainelBuilder};
pub use snapshot::{assemble, build_snapshot};

// Re-export core types for convenience
pub use painel_core::{
    CacheConfig, Clock, ColumnMap, DEFAULT_TIMEZONE, ExpenseRankRow, FlavorRankRow,
    PainelConfig, PainelError, RawRecord, RecentSale, RecordSource, ReferenceInstant,
    Snapshot, StatusResponse, SystemClock, Table, Window,
};

pub use painel_middleware::ResultCache;
