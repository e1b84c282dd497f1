use painel_core::{Metric, aggregate, rank, with_percentages};
use proptest::prelude::*;

fn arb_rows() -> impl Strategy<Value = Vec<(String, u32)>> {
    proptest::collection::vec(("[a-f]", 0u32..50), 0..60)
}

proptest! {
    #[test]
    fn ranking_is_descending_and_stable(rows in arb_rows(), by_count in any::<bool>()) {
        let metric = if by_count { Metric::Count } else { Metric::Total };
        let grouped = aggregate(&rows, |r| r.0.as_str(), |r| f64::from(r.1));
        let ranked = rank(grouped, metric, None);
        for w in ranked.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            let (ma, mb) = match metric {
                Metric::Total => (a.total, b.total),
                Metric::Count => (a.count as f64, b.count as f64),
            };
            prop_assert!(ma >= mb);
            if ma == mb {
                prop_assert!(a.first_seen < b.first_seen, "tie broken out of encounter order");
            }
        }
    }

    #[test]
    fn top_k_is_a_prefix(rows in arb_rows(), k in 1usize..12) {
        let grouped = aggregate(&rows, |r| r.0.as_str(), |r| f64::from(r.1));
        let full = rank(grouped.clone(), Metric::Total, None);
        let top = rank(grouped, Metric::Total, Some(k));
        prop_assert_eq!(top.len(), full.len().min(k));
        prop_assert_eq!(&full[..top.len()], &top[..]);
    }

    #[test]
    fn percentages_bounded(rows in arb_rows()) {
        let grouped = with_percentages(aggregate(&rows, |r| r.0.as_str(), |r| f64::from(r.1)));
        let total: f64 = grouped.iter().map(|r| r.total).sum();
        let pct_sum: f64 = grouped.iter().filter_map(|r| r.pct).sum();
        // two-decimal rounding may push the sum a hair over 100
        prop_assert!(pct_sum <= 100.0 + 0.005 * grouped.len() as f64);
        if total == 0.0 {
            prop_assert!(grouped.iter().all(|r| r.pct == Some(0.0)));
        }
    }
}
