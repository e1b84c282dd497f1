mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{ManualClock, builder_at, fixture_now};
use painel::{RawRecord, Table};
use painel_mock::DynamicMockSource;
use proptest::prelude::*;

const FLAVORS: &[&str] = &["morango", "Uva", " coco", "CHOCOLATE ", "limão"];

fn sale_row() -> impl Strategy<Value = (u32, u32, Vec<usize>)> {
    (
        1u32..=18,
        0u32..=500_000,
        prop::collection::vec(0usize..FLAVORS.len(), 1..=4),
    )
}

fn expense_row() -> impl Strategy<Value = (u32, u32, usize)> {
    (1u32..=18, 0u32..=500_000, 0usize..FLAVORS.len())
}

fn brl(cents: u32) -> String {
    format!("R$ {},{:02}", cents / 100, cents % 100)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 40, .. ProptestConfig::default() })]
    #[test]
    fn attributed_revenue_adds_up_to_monthly_sales(
        sales in prop::collection::vec(sale_row(), 0..30),
        expenses in prop::collection::vec(expense_row(), 0..30),
    ) {
        tokio_test::block_on(async move {
            let vendas: Vec<RawRecord> = sales
                .iter()
                .map(|(day, cents, items)| {
                    let cell = items.iter().map(|&i| FLAVORS[i]).collect::<Vec<_>>().join(",");
                    RawRecord::new()
                        .with("DATA E HORA", format!("{day:02}/10/2026 09:00:00"))
                        .with("VALOR DA VENDA", brl(*cents))
                        .with("SABORES", cell)
                })
                .collect();
            let gastos: Vec<RawRecord> = expenses
                .iter()
                .map(|(day, cents, item)| {
                    RawRecord::new()
                        .with("DATA E HORA", format!("{day:02}/10/2026 08:00"))
                        .with("VALOR", brl(*cents))
                        .with("ITEM", FLAVORS[*item])
                })
                .collect();

            let (source, ctl) = DynamicMockSource::new_with_controller("props");
            ctl.set_rows(Table::Vendas, vendas).await;
            ctl.set_rows(Table::Gastos, gastos).await;
            let painel = builder_at(source, ManualClock::at(fixture_now()))
                .cache_ttl(Duration::ZERO)
                .ranking_limit(100)
                .recent_limit(100)
                .build()
                .unwrap();
            let s: Arc<painel::Snapshot> = painel.snapshot().await.unwrap();

            let ranked: f64 = s.ranking_sabores.iter().map(|r| r.vendas).sum();
            let tolerance = 0.01 * s.ranking_sabores.len() as f64 + 0.01;
            assert!((ranked - s.vendas_mes).abs() <= tolerance, "{ranked} vs {}", s.vendas_mes);

            let units: u64 = s.ranking_sabores.iter().map(|r| r.quantidade).sum();
            let expected_units: usize = sales.iter().map(|(_, _, items)| items.len()).sum();
            assert_eq!(units as usize, expected_units);

            let pct: f64 = s.ranking_despesas.iter().map(|r| r.pct).sum();
            assert!(pct <= 100.0 + 0.01 * s.ranking_despesas.len() as f64);
            assert!(s.percentual_gastos >= 0.0);
            assert!((s.lucro_mes - (s.vendas_mes - s.gastos_mes)).abs() <= 0.011);
            assert_eq!(s.ultimas_vendas.len(), sales.len());
            assert!(s.vendas_hoje <= s.vendas_mes + 0.005);
        });
    }
}
