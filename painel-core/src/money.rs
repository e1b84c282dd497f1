//! Parsing of free-text monetary cells ("R$ 1.234,56", "25,00R$ 27,00", "12.5").

use std::sync::LazyLock;

use regex::Regex;

/// First run of digits joined by single `.`/`,` separators.
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)*").expect("numeric run pattern"));

/// Parse a monetary cell into a non-negative amount.
///
/// Total: missing, empty or unparseable text yields `0.0`. Only the first numeric run
/// is read, so corrupted cells holding two glued amounts count the first one.
///
/// Separator rules:
/// - `,` and `.` both present: whichever appears last is the decimal separator.
/// - only `,`: decimal separator.
/// - only `.`: decimal, unless it is pt-BR thousands grouping (`1.500`, `1.234.567`).
#[must_use]
pub fn parse_money(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let Some(run) = NUMERIC_RUN.find(&compact) else {
        return 0.0;
    };
    match normalize_separators(run.as_str()).parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse an optional quantity cell. Blank, unparseable and zero quantities are `None`.
#[must_use]
pub fn parse_quantity(text: Option<&str>) -> Option<f64> {
    let v = parse_money(text);
    (v > 0.0).then_some(v)
}

fn normalize_separators(run: &str) -> String {
    let decimal = match (run.rfind(','), run.rfind('.')) {
        (Some(c), Some(d)) => Some(if c > d { c } else { d }),
        (Some(c), None) => Some(c),
        (None, Some(d)) if dot_is_decimal(run) => Some(d),
        _ => None,
    };
    run.char_indices()
        .filter_map(|(i, ch)| match ch {
            '0'..='9' => Some(ch),
            _ if Some(i) == decimal => Some('.'),
            _ => None,
        })
        .collect()
}

fn dot_is_decimal(run: &str) -> bool {
    let mut groups = run.split('.');
    let head = groups.next().unwrap_or_default();
    let tail: Vec<&str> = groups.collect();
    match tail.as_slice() {
        [frac] => head == "0" || frac.len() != 3,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazilian_format_with_symbol() {
        assert_eq!(parse_money(Some("R$ 1.234,56")), 1234.56);
        assert_eq!(parse_money(Some("R$25,00")), 25.0);
    }

    #[test]
    fn glued_amounts_take_first_run() {
        assert_eq!(parse_money(Some("R$ 25,00R$ 27,00")), 25.0);
    }

    #[test]
    fn missing_and_garbage_are_zero() {
        assert_eq!(parse_money(None), 0.0);
        assert_eq!(parse_money(Some("")), 0.0);
        assert_eq!(parse_money(Some("   ")), 0.0);
        assert_eq!(parse_money(Some("R$ -")), 0.0);
        assert_eq!(parse_money(Some("n/a")), 0.0);
    }

    #[test]
    fn later_separator_is_decimal() {
        assert_eq!(parse_money(Some("1,234.56")), 1234.56);
        assert_eq!(parse_money(Some("1.234.567,8")), 1_234_567.8);
        assert_eq!(parse_money(Some("1,234,567.89")), 1_234_567.89);
    }

    #[test]
    fn comma_only_is_decimal() {
        assert_eq!(parse_money(Some("12,5")), 12.5);
        assert_eq!(parse_money(Some("0,99")), 0.99);
    }

    #[test]
    fn dot_only_depends_on_grouping() {
        assert_eq!(parse_money(Some("12.50")), 12.5);
        assert_eq!(parse_money(Some("7.5")), 7.5);
        assert_eq!(parse_money(Some("1.500")), 1500.0);
        assert_eq!(parse_money(Some("1.234.567")), 1_234_567.0);
        assert_eq!(parse_money(Some("0.500")), 0.5);
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(parse_money(Some("-15,00")), 15.0);
    }

    #[test]
    fn plain_numbers_from_typed_cells() {
        assert_eq!(parse_money(Some("42")), 42.0);
        assert_eq!(parse_money(Some("42.75")), 42.75);
    }

    #[test]
    fn quantity_is_optional() {
        assert_eq!(parse_quantity(None), None);
        assert_eq!(parse_quantity(Some("")), None);
        assert_eq!(parse_quantity(Some("0")), None);
        assert_eq!(parse_quantity(Some("3")), Some(3.0));
        assert_eq!(parse_quantity(Some("2,5 kg")), Some(2.5));
    }
}
