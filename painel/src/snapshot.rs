//! The snapshot pipeline: fetch, clean, window, explode, aggregate, assemble.

use chrono::NaiveDate;
use painel_core::{
    AggregateRow, CleanExpense, CleanSale, Clock, ExpenseRankRow, ExplodedItem, FlavorRankRow,
    Measure, Metric, PainelConfig, PainelError, RawRecord, RecentSale, RecordSource,
    ReferenceInstant, Snapshot, Table, Window, aggregate, aggregate_measured, clean_expenses,
    clean_sales, explode, most_recent, percentage, rank, round2, split_items, with_percentages_of,
};

/// Fetch both tables and assemble a snapshot.
///
/// The reference instant is sampled once, after the fetch, and every window of the
/// build is derived from it.
///
/// # Errors
/// Returns the source's error when either table cannot be fetched. Nothing past the
/// fetch can fail.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "painel::snapshot",
        name = "painel::snapshot::build",
        skip_all,
        fields(source = source.name(), vendor = source.vendor()),
    )
)]
pub async fn build_snapshot(
    source: &dyn RecordSource,
    clock: &dyn Clock,
    cfg: &PainelConfig,
) -> Result<Snapshot, PainelError> {
    let (sales, expenses) =
        futures::future::try_join(source.fetch(Table::Vendas), source.fetch(Table::Gastos))
            .await?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "painel::snapshot",
        vendas = sales.len(),
        gastos = expenses.len(),
        "fetched tables"
    );
    let reference = ReferenceInstant::sample(clock, cfg.timezone);
    let snapshot = assemble(&sales, &expenses, &reference, cfg);
    #[cfg(feature = "tracing")]
    tracing::info!(
        target: "painel::snapshot",
        vendas_mes = snapshot.vendas_mes,
        gastos_mes = snapshot.gastos_mes,
        at = %snapshot.ultima_atualizacao,
        "snapshot built"
    );
    Ok(snapshot)
}

/// Turn raw rows into a snapshot as seen from `reference`.
///
/// Pure: the same rows and reference always give the same snapshot.
#[must_use]
pub fn assemble(
    raw_sales: &[RawRecord],
    raw_expenses: &[RawRecord],
    reference: &ReferenceInstant,
    cfg: &PainelConfig,
) -> Snapshot {
    let sep = cfg.item_separator;
    let sales = clean_sales(raw_sales, &cfg.columns);
    let expenses = clean_expenses(raw_expenses, &cfg.columns);

    let sales_today = within(&sales, reference, Window::Today, CleanSale::date);
    let sales_month = within(&sales, reference, Window::MonthToDate, CleanSale::date);
    let expenses_today = within(&expenses, reference, Window::Today, CleanExpense::date);
    let expenses_month = within(&expenses, reference, Window::MonthToDate, CleanExpense::date);

    let vendas_hoje: f64 = sales_today.iter().map(|s| s.value).sum();
    let vendas_mes: f64 = sales_month.iter().map(|s| s.value).sum();
    let gastos_hoje: f64 = expenses_today.iter().map(|e| e.value).sum();
    let gastos_mes: f64 = expenses_month.iter().map(|e| e.value).sum();
    let itens_vendidos_hoje: usize = sales_today
        .iter()
        .map(|s| split_items(&s.items, sep).len())
        .sum();

    let exploded: Vec<ExplodedItem> = sales_month
        .iter()
        .flat_map(|s| explode(s.value, &s.items, sep, s.row))
        .collect();
    let flavors = aggregate(&exploded, |i| i.item.as_str(), |i| i.value);
    let limit = Some(cfg.ranking_limit);

    // Purchase cells may list several products; value and quantity are shared evenly.
    let purchases: Vec<(ExplodedItem, f64)> = expenses_month
        .iter()
        .flat_map(|e| {
            let pieces = explode(e.value, &e.description, sep, e.row);
            #[allow(clippy::cast_precision_loss)]
            let per_piece = e.quantity.unwrap_or(1.0) / pieces.len().max(1) as f64;
            pieces.into_iter().map(move |p| (p, per_piece))
        })
        .collect();
    let expense_groups = aggregate_measured(
        &purchases,
        |(p, _)| p.item.as_str(),
        |(p, q)| Measure {
            value: p.value,
            quantity: *q,
        },
    );

    let recent = most_recent(sales.iter().collect(), cfg.recent_limit, |s| s.recency());

    Snapshot {
        vendas_hoje: round2(vendas_hoje),
        gastos_hoje: round2(gastos_hoje),
        vendas_mes: round2(vendas_mes),
        gastos_mes: round2(gastos_mes),
        lucro_mes: round2(round2(vendas_mes) - round2(gastos_mes)),
        percentual_gastos: percentage(gastos_mes, vendas_mes),
        qtd_vendas_hoje: count(sales_today.len()),
        itens_vendidos_hoje: count(itens_vendidos_hoje),
        ranking_sabores: flavor_rows(rank(flavors.clone(), Metric::Total, limit)),
        ranking_sabores_volume: flavor_rows(rank(flavors, Metric::Count, limit)),
        ranking_despesas: expense_rows(with_percentages_of(
            rank(expense_groups, Metric::Total, limit),
            gastos_mes,
        )),
        ultimas_vendas: recent
            .into_iter()
            .map(|s| RecentSale {
                data_hora: s.raw_timestamp.clone(),
                valor: round2(s.value),
                sabores: s.items.clone(),
            })
            .collect(),
        ultima_atualizacao: reference.clock_label(),
        gerado_em: reference.utc().to_rfc3339(),
    }
}

fn within<'a, T>(
    rows: &'a [T],
    reference: &ReferenceInstant,
    window: Window,
    date: impl Fn(&T) -> Option<NaiveDate>,
) -> Vec<&'a T> {
    rows.iter()
        .filter(|r| reference.contains(window, date(*r)))
        .collect()
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

fn flavor_rows(rows: Vec<AggregateRow>) -> Vec<FlavorRankRow> {
    rows.into_iter()
        .map(|r| FlavorRankRow {
            item: r.key,
            vendas: round2(r.total),
            quantidade: r.count,
        })
        .collect()
}

// `pct` is relative to the whole window total, so purchases whose item cell is blank
// still weigh in even though they are not ranked.
fn expense_rows(rows: Vec<AggregateRow>) -> Vec<ExpenseRankRow> {
    rows.into_iter()
        .map(|r| ExpenseRankRow {
            pct: r.pct.unwrap_or_default(),
            descricao: r.key,
            total: round2(r.total),
            quantidade: round2(r.quantity),
        })
        .collect()
}
