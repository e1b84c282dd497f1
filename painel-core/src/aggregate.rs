//! Grouping, percentages, stable rankings and recency views.

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// Normalize a grouping key: trim surrounding whitespace and upper-case.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Round to two decimal places for presentation.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `part` as a percentage of `whole`, rounded to two decimals. Zero when `whole` is not positive.
#[must_use]
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round2(part / whole * 100.0)
    } else {
        0.0
    }
}

/// The quantities a record contributes to its group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    /// Monetary value added to the group total.
    pub value: f64,
    /// Secondary quantity added to the group quantity.
    pub quantity: f64,
}

/// One group of an aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Normalized group key.
    pub key: String,
    /// Sum of the records' values.
    pub total: f64,
    /// Number of records in the group.
    pub count: u64,
    /// Sum of the records' secondary quantities.
    pub quantity: f64,
    /// Share of the grand total in percent, once computed.
    pub pct: Option<f64>,
    /// Position of the group's first record in the input; the tie-break order of rankings.
    pub first_seen: usize,
}

/// Primary metric of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Sum of values.
    Total,
    /// Number of occurrences.
    Count,
}

/// Group `records` by normalized key, summing `value_fn` and counting occurrences.
///
/// Groups come back in order of first appearance.
pub fn aggregate<'a, T, I, K, V>(records: I, key_fn: K, value_fn: V) -> Vec<AggregateRow>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Fn(&'a T) -> &'a str,
    V: Fn(&'a T) -> f64,
{
    aggregate_measured(records, key_fn, |r| Measure {
        value: value_fn(r),
        quantity: 1.0,
    })
}

/// Like [`aggregate`], with a caller-supplied secondary quantity per record.
pub fn aggregate_measured<'a, T, I, K, M>(records: I, key_fn: K, measure_fn: M) -> Vec<AggregateRow>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Fn(&'a T) -> &'a str,
    M: Fn(&'a T) -> Measure,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<AggregateRow> = Vec::new();
    for (pos, record) in records.into_iter().enumerate() {
        let key = normalize_key(key_fn(record));
        let m = measure_fn(record);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            rows.push(AggregateRow {
                key,
                total: 0.0,
                count: 0,
                quantity: 0.0,
                pct: None,
                first_seen: pos,
            });
            rows.len() - 1
        });
        let row = &mut rows[slot];
        row.total += m.value;
        row.quantity += m.quantity;
        row.count += 1;
    }
    rows
}

/// Fill `pct` of every row against the grand total of all rows.
#[must_use]
pub fn with_percentages(rows: Vec<AggregateRow>) -> Vec<AggregateRow> {
    let grand_total: f64 = rows.iter().map(|r| r.total).sum();
    with_percentages_of(rows, grand_total)
}

/// Fill `pct` of every row against an externally known `whole`.
///
/// Use this when `rows` is only part of the population, e.g. after top-K truncation
/// or when some records were not grouped.
#[must_use]
pub fn with_percentages_of(mut rows: Vec<AggregateRow>, whole: f64) -> Vec<AggregateRow> {
    for row in &mut rows {
        row.pct = Some(percentage(row.total, whole));
    }
    rows
}

/// Sort descending by `metric` and keep the first `limit` rows (all rows when `None`).
///
/// The sort is stable: rows with equal metric keep their input order.
#[must_use]
pub fn rank(mut rows: Vec<AggregateRow>, metric: Metric, limit: Option<usize>) -> Vec<AggregateRow> {
    match metric {
        Metric::Total => rows.sort_by(|a, b| b.total.total_cmp(&a.total)),
        Metric::Count => rows.sort_by(|a, b| b.count.cmp(&a.count)),
    }
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Ordering key of the recency view.
///
/// Parsed timestamps rank above unparseable ones; unparseable ones compare by raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecencyKey<'a> {
    /// Timestamp text that could not be parsed.
    Unparsed(&'a str),
    /// Parsed wall-clock timestamp.
    Parsed(NaiveDateTime),
}

/// The `n` most recent items, newest first. Equal keys keep input order.
///
/// Ordering is by the parsed timestamp, not by the calendar windows, so a row dated in
/// the future (a typo such as "05/11/2026" in October) sorts above every real one.
#[must_use]
pub fn most_recent<T, K>(mut items: Vec<T>, n: usize, key_fn: K) -> Vec<T>
where
    K: Fn(&T) -> RecencyKey<'_>,
{
    items.sort_by(|a, b| key_fn(b).cmp(&key_fn(a)));
    items.truncate(n);
    items
}
