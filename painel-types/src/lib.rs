//! Painel-specific data transfer objects, configuration primitives and the unified error type.
#![warn(missing_docs)]

mod config;
mod error;
mod snapshot;
mod table;

pub use config::{CacheConfig, ColumnMap, DEFAULT_TIMEZONE, PainelConfig};
pub use error::PainelError;
pub use snapshot::{ExpenseRankRow, FlavorRankRow, RecentSale, Snapshot, StatusResponse};
pub use table::Table;
