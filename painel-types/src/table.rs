//! Names of the upstream tables a record source serves.

use serde::{Deserialize, Serialize};

/// One of the two feeds the dashboard is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    /// Sales records.
    Vendas,
    /// Expense records.
    Gastos,
}

impl Table {
    /// Worksheet name as stored upstream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vendas => "vendas",
            Self::Gastos => "gastos",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
