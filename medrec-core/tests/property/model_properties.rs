use medrec_core::models::{AccessScope, RiskBand, RiskScore};
use proptest::prelude::*;

// ── Scores stay inside 0..=100 ───────────────────────────────────────────

proptest! {
    #[test]
    fn risk_score_bounded(raw in -1000.0f64..1000.0) {
        let score = RiskScore::new(raw);
        prop_assert!((0.0..=100.0).contains(&score.value()));
        prop_assert!((0.0..=100.0).contains(&score.rounded()));
    }
}

// ── Rounding never moves a score more than half a tenth ──────────────────

proptest! {
    #[test]
    fn rounding_stays_close(raw in 0.0f64..=100.0) {
        let score = RiskScore::new(raw);
        prop_assert!((score.rounded() - score.value()).abs() <= 0.05 + f64::EPSILON);
    }
}

// ── Bands agree with threshold constants ─────────────────────────────────

proptest! {
    #[test]
    fn band_matches_thresholds(raw in 0.0f64..=100.0) {
        let score = RiskScore::new(raw);
        let expected = if raw >= RiskScore::HIGH_THRESHOLD {
            RiskBand::High
        } else if raw >= RiskScore::ELEVATED_THRESHOLD {
            RiskBand::Elevated
        } else if raw >= RiskScore::MODERATE_THRESHOLD {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        };
        prop_assert_eq!(score.band(), expected);
    }
}

// ── Owner scope permits exactly its own id ───────────────────────────────

proptest! {
    #[test]
    fn owner_scope_permits_only_owner(owner in 1i64..10_000, other in 1i64..10_000) {
        let scope = AccessScope::Owner(owner);
        prop_assert!(scope.permits(owner));
        prop_assert_eq!(scope.permits(other), owner == other);
        prop_assert_eq!(scope.owner_filter(), Some(owner));
        prop_assert!(AccessScope::Any.permits(other));
    }
}
