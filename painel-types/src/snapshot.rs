//! Dashboard snapshot and the status payload served to clients.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::PainelError;

/// One row of a flavor ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorRankRow {
    /// Normalized item name.
    pub item: String,
    /// Sales value attributed to the item.
    pub vendas: f64,
    /// Number of times the item was sold.
    pub quantidade: u64,
}

/// One row of the expense ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRankRow {
    /// Normalized description/product.
    #[serde(rename = "descrição")]
    pub descricao: String,
    /// Total spent on this description in the window.
    pub total: f64,
    /// Share of the window's expense total, in percent with two decimals.
    pub pct: f64,
    /// Purchased quantity (rows without a quantity count as one).
    pub quantidade: f64,
}

/// A sale as listed in the recent transactions view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSale {
    /// Timestamp text exactly as delivered by the source.
    pub data_hora: String,
    /// Parsed sale value.
    pub valor: f64,
    /// Item field exactly as delivered by the source.
    pub sabores: String,
}

/// Full computed dashboard state.
///
/// Every field is always present; absent data shows up as zero or an empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Sales total for today.
    pub vendas_hoje: f64,
    /// Expense total for today.
    pub gastos_hoje: f64,
    /// Sales total for the month to date.
    pub vendas_mes: f64,
    /// Expense total for the month to date.
    pub gastos_mes: f64,
    /// `vendas_mes - gastos_mes`.
    pub lucro_mes: f64,
    /// Month expenses as a percentage of month sales (0 without sales).
    pub percentual_gastos: f64,
    /// Number of sale transactions today.
    pub qtd_vendas_hoje: u64,
    /// Number of individual items sold today.
    pub itens_vendidos_hoje: u64,
    /// Month-to-date flavors ranked by attributed sales value.
    pub ranking_sabores: Vec<FlavorRankRow>,
    /// Month-to-date flavors ranked by number of sales.
    pub ranking_sabores_volume: Vec<FlavorRankRow>,
    /// Month-to-date expenses ranked by total.
    pub ranking_despesas: Vec<ExpenseRankRow>,
    /// Most recent sales regardless of date window.
    pub ultimas_vendas: Vec<RecentSale>,
    /// Local wall-clock time of the build, `HH:MM:SS`.
    pub ultima_atualizacao: String,
    /// Build instant in RFC 3339.
    pub gerado_em: String,
}

/// Payload returned by the status endpoint.
///
/// Failures are surfaced as data (`{"erro": ...}`), never as transport errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusResponse {
    /// A successfully built (or cached) snapshot.
    Ok(Arc<Snapshot>),
    /// The build failed.
    Error {
        /// Human-readable failure message.
        erro: String,
    },
}

impl StatusResponse {
    /// Returns the snapshot when the status is successful.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Ok(s) => Some(s),
            Self::Error { .. } => None,
        }
    }

    /// Returns the error message when the status is a failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Error { erro } => Some(erro),
        }
    }
}

impl From<Result<Arc<Snapshot>, PainelError>> for StatusResponse {
    fn from(res: Result<Arc<Snapshot>, PainelError>) -> Self {
        match res {
            Ok(snapshot) => Self::Ok(snapshot),
            Err(e) => Self::Error {
                erro: e.to_string(),
            },
        }
    }
}
