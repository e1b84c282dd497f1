use painel_core::RawRecord;

fn sale(ts: &str, value: &str, flavors: &str) -> RawRecord {
    RawRecord::from_pairs([
        ("DATA E HORA", ts),
        ("VALOR DA VENDA", value),
        ("SABORES", flavors),
    ])
}

/// Sales feed as of 2026-10-18, in sheet order.
pub fn rows() -> Vec<RawRecord> {
    vec![
        sale("30/09/2026 21:15:00", "R$ 40,00", "morango, morango"),
        sale("02/10/2026 16:00:00", "R$ 1.234,56", "uva"),
        sale("17/10/2026 19:40:10", "R$ 25,00R$ 27,00", "chocolate, coco"),
        sale("data inválida", "R$ 8,00", "limão"),
        sale("18/10/2026 10:05:00", "R$ 12,50", "Morango "),
        sale("18/10/2026 14:32:05", "R$ 30,00", "morango, Chocolate, uva"),
        sale("18/10/2026 15:00:00", "", "coco"),
    ]
}
