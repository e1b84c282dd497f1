use painel_core::RawRecord;

fn expense(ts: &str, value: &str, item: &str, qty: &str) -> RawRecord {
    RawRecord::from_pairs([
        ("DATA E HORA", ts),
        ("VALOR", value),
        ("ITEM", item),
        ("QUANTIDADE", qty),
    ])
}

/// Expense feed as of 2026-10-18, in sheet order.
pub fn rows() -> Vec<RawRecord> {
    vec![
        expense("28/09/2026 10:00:00", "R$ 300,00", "Aluguel", ""),
        expense("05/10/2026 11:00:00", "R$ 1.000,00", "Aluguel", ""),
        expense("10/10/2026", "R$ 45,90", "Embalagens", "100"),
        expense("15/10/2026 09:30:00", "R$ 80,00", "leite ", "5"),
        expense("18/10/2026 08:00:00", "R$ 150,00", "Leite", "10"),
    ]
}
