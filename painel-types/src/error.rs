use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the painel workspace.
///
/// Only whole-build failures end up here: missing configuration, upstream source
/// failures, missing tables and invalid builder settings. Field-level parse problems
/// (monetary text, timestamps) are absorbed by the cleaning layer and never surface.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PainelError {
    /// Credentials or the dataset identifier required by a source are absent.
    #[error("missing configuration: {what}")]
    MissingConfig {
        /// Name of the missing setting, e.g. "SPREADSHEET_ID".
        what: String,
    },

    /// A record source failed (network, authentication, transport).
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The source has no table with the requested name.
    #[error("table not found: {table}")]
    TableNotFound {
        /// Table name as known by the source (e.g. "vendas").
        table: String,
    },

    /// Upstream data is structurally unusable.
    #[error("data issue: {0}")]
    Data(String),

    /// Builder or configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PainelError {
    /// Helper: build a `MissingConfig` error for the named setting.
    pub fn missing_config(what: impl Into<String>) -> Self {
        Self::MissingConfig { what: what.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `TableNotFound` error.
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    /// Stable machine-readable label for the error variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingConfig { .. } => "missing_config",
            Self::Source { .. } => "source",
            Self::TableNotFound { .. } => "table_not_found",
            Self::Data(_) => "data",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Other(_) => "other",
        }
    }

    /// Returns true if retrying the build later may succeed.
    ///
    /// Configuration problems will not fix themselves between calls; upstream
    /// failures usually do.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Source { .. } | Self::Other(_))
    }
}
