use async_trait::async_trait;
use painel_core::{PainelError, RawRecord, RecordSource, Table};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock source for CI-safe demos. Provides deterministic data from static fixtures.
///
/// The fixtures describe October 2026 up to the 18th and deliberately include the
/// cell defects seen in real sheets: glued amounts, blank values, undated rows,
/// inconsistent casing and a row from the previous month.
pub struct MockSource {
    missing: Option<Table>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A source serving both fixture tables.
    #[must_use]
    pub const fn new() -> Self {
        Self { missing: None }
    }

    /// A source whose `table` worksheet does not exist.
    #[must_use]
    pub const fn without_table(table: Table) -> Self {
        Self {
            missing: Some(table),
        }
    }

    /// Fixture rows for `table`, as the source would deliver them.
    #[must_use]
    pub fn fixture(table: Table) -> Vec<RawRecord> {
        match table {
            Table::Vendas => fixtures::vendas::rows(),
            Table::Gastos => fixtures::gastos::rows(),
        }
    }
}

#[async_trait]
impl RecordSource for MockSource {
    fn name(&self) -> &'static str {
        "painel-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(&self, table: Table) -> Result<Vec<RawRecord>, PainelError> {
        if self.missing == Some(table) {
            return Err(PainelError::table_not_found(table.as_str()));
        }
        Ok(Self::fixture(table))
    }
}
