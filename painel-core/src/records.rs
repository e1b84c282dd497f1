//! Raw rows to cleaned sales and expenses.

use chrono::{NaiveDate, NaiveDateTime};

use crate::aggregate::RecencyKey;
use crate::money::{parse_money, parse_quantity};
use crate::source::RawRecord;
use crate::temporal::parse_day_first;
use crate::ColumnMap;

/// A sales row with its monetary and temporal fields interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanSale {
    /// Position of the row in the sales table.
    pub row: usize,
    /// Timestamp text as delivered.
    pub raw_timestamp: String,
    /// Parsed wall-clock timestamp, if the text was understood.
    pub timestamp: Option<NaiveDateTime>,
    /// Sale value; `0.0` when the cell was missing or unreadable.
    pub value: f64,
    /// Multi-value item cell as delivered.
    pub items: String,
}

impl CleanSale {
    /// Calendar date of the sale, if known.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|t| t.date())
    }

    /// Ordering key for the recent sales view.
    #[must_use]
    pub fn recency(&self) -> RecencyKey<'_> {
        recency(self.timestamp, &self.raw_timestamp)
    }
}

/// An expense row with its monetary and temporal fields interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanExpense {
    /// Position of the row in the expenses table.
    pub row: usize,
    /// Timestamp text as delivered.
    pub raw_timestamp: String,
    /// Parsed wall-clock timestamp, if the text was understood.
    pub timestamp: Option<NaiveDateTime>,
    /// Expense value; `0.0` when the cell was missing or unreadable.
    pub value: f64,
    /// Description/product cell as delivered.
    pub description: String,
    /// Purchased quantity, when the row carries one.
    pub quantity: Option<f64>,
}

impl CleanExpense {
    /// Calendar date of the expense, if known.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|t| t.date())
    }

    /// Ordering key for recency views.
    #[must_use]
    pub fn recency(&self) -> RecencyKey<'_> {
        recency(self.timestamp, &self.raw_timestamp)
    }
}

fn recency(timestamp: Option<NaiveDateTime>, raw: &str) -> RecencyKey<'_> {
    timestamp.map_or(RecencyKey::Unparsed(raw), RecencyKey::Parsed)
}

fn cell(row: &RawRecord, column: &str) -> String {
    row.get(column).map(str::trim).unwrap_or_default().to_string()
}

/// Interpret every sales row. Never fails; unreadable cells become defaults.
#[must_use]
pub fn clean_sales(rows: &[RawRecord], columns: &ColumnMap) -> Vec<CleanSale> {
    let sales: Vec<CleanSale> = rows
        .iter()
        .enumerate()
        .map(|(row, r)| {
            let raw_timestamp = cell(r, &columns.sale_timestamp);
            CleanSale {
                row,
                timestamp: parse_day_first(&raw_timestamp),
                raw_timestamp,
                value: parse_money(r.get(&columns.sale_value)),
                items: cell(r, &columns.sale_items),
            }
        })
        .collect();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "painel::records",
        rows = sales.len(),
        undated = sales.iter().filter(|s| s.timestamp.is_none()).count(),
        "cleaned sales"
    );
    sales
}

/// Interpret every expense row. Never fails; unreadable cells become defaults.
#[must_use]
pub fn clean_expenses(rows: &[RawRecord], columns: &ColumnMap) -> Vec<CleanExpense> {
    let expenses: Vec<CleanExpense> = rows
        .iter()
        .enumerate()
        .map(|(row, r)| {
            let raw_timestamp = cell(r, &columns.expense_timestamp);
            CleanExpense {
                row,
                timestamp: parse_day_first(&raw_timestamp),
                raw_timestamp,
                value: parse_money(r.get(&columns.expense_value)),
                description: cell(r, &columns.expense_description),
                quantity: parse_quantity(r.get(&columns.expense_quantity)),
            }
        })
        .collect();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "painel::records",
        rows = expenses.len(),
        undated = expenses.iter().filter(|e| e.timestamp.is_none()).count(),
        "cleaned expenses"
    );
    expenses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_cells_are_interpreted() {
        let cols = ColumnMap::default();
        let rows = vec![
            RawRecord::new()
                .with("DATA E HORA", "18/10/2026 14:00:00")
                .with("VALOR DA VENDA", "R$ 30,00")
                .with("SABORES", " morango, uva "),
            RawRecord::new().with("VALOR DA VENDA", "abc"),
        ];
        let sales = clean_sales(&rows, &cols);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].value, 30.0);
        assert_eq!(sales[0].date(), NaiveDate::from_ymd_opt(2026, 10, 18));
        assert_eq!(sales[0].items, "morango, uva");
        assert_eq!(sales[1].value, 0.0);
        assert_eq!(sales[1].timestamp, None);
        assert_eq!(sales[1].row, 1);
        assert_eq!(sales[1].recency(), RecencyKey::Unparsed(""));
    }

    #[test]
    fn expense_quantity_is_optional() {
        let cols = ColumnMap::default();
        let rows = vec![
            RawRecord::new()
                .with("DATA E HORA", "01/10/2026")
                .with("VALOR", "R$ 1.200,00")
                .with("ITEM", "Leite")
                .with("QUANTIDADE", "12"),
            RawRecord::new()
                .with("DATA E HORA", "sem data")
                .with("VALOR", "50")
                .with("ITEM", "gás"),
        ];
        let expenses = clean_expenses(&rows, &cols);
        assert_eq!(expenses[0].value, 1200.0);
        assert_eq!(expenses[0].quantity, Some(12.0));
        assert_eq!(expenses[1].quantity, None);
        assert_eq!(expenses[1].date(), None);
        assert_eq!(expenses[1].raw_timestamp, "sem data");
    }
}
