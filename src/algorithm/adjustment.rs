//! Ordered multiplicative adjustment chains
//!
//! The IVF calculator compounds its clinical adjustments: each step applies
//! to the running rate, not the base rate, so order matters. Expressing the
//! chain as a fold over an explicit step list keeps that order-dependence
//! visible and testable in isolation.

/// One multiplicative adjustment step, in percent of the running rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateAdjustment {
    /// Stable name, also used as the clinical-factors key
    pub label: &'static str,
    /// Signed percentage applied to the running rate
    pub percent: f64,
}

/// Fold an ordered adjustment chain over a base rate
#[must_use]
pub fn apply_rate_adjustments(base: f64, steps: &[RateAdjustment], log_steps: bool) -> f64 {
    steps.iter().fold(base, |rate, step| {
        let next = rate * (1.0 + step.percent / 100.0);
        if log_steps {
            log::debug!(
                "adjustment {}: {:+.1}% ({:.2} -> {:.2})",
                step.label,
                step.percent,
                rate,
                next
            );
        }
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_is_identity() {
        assert_eq!(apply_rate_adjustments(25.1, &[], false), 25.1);
    }

    #[test]
    fn test_steps_compound_on_running_rate() {
        let steps = [
            RateAdjustment { label: "a", percent: 10.0 },
            RateAdjustment { label: "b", percent: -50.0 },
        ];
        let result = apply_rate_adjustments(100.0, &steps, false);
        // 100 * 1.10 * 0.50, not 100 * (1 + 0.10 - 0.50)
        assert!((result - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_percent_step_is_neutral() {
        let steps = [RateAdjustment { label: "noop", percent: 0.0 }];
        assert_eq!(apply_rate_adjustments(42.0, &steps, false), 42.0);
    }
}
