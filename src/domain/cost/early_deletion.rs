//! Early-deletion penalty proration

/// Straight-line proration of the full per-GB penalty by the fraction
/// of the minimum-duration commitment not yet honored.
///
/// `storage_duration_days` of `None` disables the penalty; `Some(0.0)`
/// charges it in full. Residency at or beyond the minimum costs
/// nothing.
pub fn early_deletion_penalty(
    size_gb: f64,
    minimum_storage_duration_days: Option<f64>,
    penalty_per_gb: Option<f64>,
    storage_duration_days: Option<f64>,
) -> f64 {
    let (Some(minimum), Some(penalty), Some(duration)) = (
        minimum_storage_duration_days,
        penalty_per_gb,
        storage_duration_days,
    ) else {
        return 0.0;
    };

    if size_gb <= 0.0 || minimum <= 0.0 {
        return 0.0;
    }

    let remaining = minimum - duration;
    if remaining <= 0.0 {
        return 0.0;
    }

    size_gb * penalty * (remaining / minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duration_means_no_penalty() {
        assert_eq!(early_deletion_penalty(1000.0, Some(90.0), Some(0.0036), None), 0.0);
    }

    #[test]
    fn test_no_minimum_means_no_penalty() {
        // Hot tiers carry no minimum duration.
        assert_eq!(early_deletion_penalty(1000.0, None, None, Some(10.0)), 0.0);
    }

    #[test]
    fn test_zero_days_charges_full_penalty() {
        let penalty = early_deletion_penalty(1000.0, Some(90.0), Some(0.0036), Some(0.0));
        assert!((penalty - 1000.0 * 0.0036).abs() < 1e-12);
    }

    #[test]
    fn test_at_minimum_is_free() {
        assert_eq!(
            early_deletion_penalty(1000.0, Some(90.0), Some(0.0036), Some(90.0)),
            0.0
        );
        assert_eq!(
            early_deletion_penalty(1000.0, Some(90.0), Some(0.0036), Some(120.0)),
            0.0
        );
    }

    #[test]
    fn test_straight_line_proration() {
        // 30 of 90 days served leaves two thirds of the penalty.
        let penalty = early_deletion_penalty(300.0, Some(90.0), Some(0.0036), Some(30.0));
        let expected = 300.0 * 0.0036 * (60.0 / 90.0);
        assert!((penalty - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_tier_costs_nothing() {
        assert_eq!(early_deletion_penalty(0.0, Some(90.0), Some(0.0036), Some(0.0)), 0.0);
        assert_eq!(
            early_deletion_penalty(-5.0, Some(90.0), Some(0.0036), Some(0.0)),
            0.0
        );
    }
}
