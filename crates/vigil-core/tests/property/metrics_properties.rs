use proptest::prelude::*;
use vigil_core::{MetricKind, Metrics, RawMetrics, RiskLevel};

fn arb_kind() -> impl Strategy<Value = MetricKind> {
    prop::sample::select(MetricKind::ALL.to_vec())
}

// ── Valid snapshots survive the wire form ───────────────────────────────

proptest! {
    #[test]
    fn valid_snapshot_round_trips(
        c in 0.0f64..50.0,
        a in 0.0f64..=100.0,
        r in 0.0f64..365.0,
        ch in 0u32..100_000,
        o in 0.0f64..=1.0,
    ) {
        let metrics = Metrics::new(c, a, r, ch, o).unwrap();
        let json = serde_json::to_string(&metrics).unwrap();
        let back: Metrics = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, metrics);
        prop_assert_eq!(RawMetrics::from(metrics).validate().unwrap(), metrics);
    }
}

// ── Negative and non-finite values rejected ─────────────────────────────

proptest! {
    #[test]
    fn negative_values_rejected(kind in arb_kind(), v in -1e9f64..-1e-9) {
        prop_assert!(kind.validate_value(v).is_err());
    }

    #[test]
    fn non_finite_rejected(
        kind in arb_kind(),
        v in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        prop_assert!(kind.validate_value(v).is_err());
    }
}

// ── Level is monotone in score ──────────────────────────────────────────

proptest! {
    #[test]
    fn level_monotone(a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RiskLevel::from_score(lo) <= RiskLevel::from_score(hi));
    }
}
