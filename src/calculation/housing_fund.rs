//! Housing fund contribution calculation.

use crate::config::HousingFundSchedule;
use crate::models::Money;

/// Returns the housing fund contribution for a salary.
///
/// The rate is tiered: `low_rate` for salaries at or below the low
/// threshold, `high_rate` above it. The rate is applied to the salary
/// capped at `base_cap`, and the resulting contribution is itself capped
/// at `contribution_cap`. Total over all inputs; for the standard
/// schedule (1%/2% split at 1500, base cap 10000, contribution cap 200)
/// the result is always in `[0.00, 200.00]`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::housing_fund;
/// use payroll_engine::config::standard_schedules;
/// use payroll_engine::models::Money;
///
/// let set = standard_schedules();
/// // 4700 is above the 1500 threshold, so 2% applies: 94.00.
/// assert_eq!(housing_fund(Money::from_major(4700), &set.housing), Money::from_major(94));
/// ```
pub fn housing_fund(basic_pay: Money, schedule: &HousingFundSchedule) -> Money {
    let rate = if basic_pay <= schedule.low_threshold {
        schedule.low_rate
    } else {
        schedule.high_rate
    };
    let base = basic_pay.min(schedule.base_cap);
    base.mul_decimal(rate)
        .min(schedule.contribution_cap)
        .max(Money::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::standard_schedules;

    fn schedule() -> HousingFundSchedule {
        standard_schedules().housing
    }

    /// HF-001: 1% applies at and below the low threshold
    #[test]
    fn test_low_rate_region() {
        let schedule = schedule();
        assert_eq!(housing_fund(Money::ZERO, &schedule), Money::ZERO);
        assert_eq!(housing_fund(Money::from_major(1_000), &schedule), Money::from_major(10));
        assert_eq!(housing_fund(Money::from_major(1_500), &schedule), Money::from_major(15));
    }

    /// HF-002: 2% applies immediately above the low threshold
    #[test]
    fn test_high_rate_region() {
        let schedule = schedule();
        assert_eq!(
            housing_fund(Money::from_minor(150_001), &schedule),
            Money::from_minor(3_000)
        );
        assert_eq!(housing_fund(Money::from_major(4_700), &schedule), Money::from_major(94));
    }

    /// HF-003: the contribution base caps at 10000, so 200 is the ceiling
    #[test]
    fn test_contribution_caps_at_200() {
        let schedule = schedule();
        assert_eq!(housing_fund(Money::from_major(10_000), &schedule), Money::from_major(200));
        assert_eq!(housing_fund(Money::from_major(50_000), &schedule), Money::from_major(200));
        assert_eq!(housing_fund(Money::from_major(500_000), &schedule), Money::from_major(200));
    }

    /// HF-004: negative salary contributes nothing
    #[test]
    fn test_negative_salary_clamps_to_zero() {
        let schedule = schedule();
        assert_eq!(housing_fund(Money::from_major(-5_000), &schedule), Money::ZERO);
    }

    /// HF-005: the rate jump at the threshold never decreases the contribution
    #[test]
    fn test_non_decreasing_across_threshold() {
        let schedule = schedule();
        let at_threshold = housing_fund(Money::from_major(1_500), &schedule);
        let above_threshold = housing_fund(Money::from_minor(150_001), &schedule);
        assert!(above_threshold >= at_threshold);
    }

    #[test]
    fn test_fractional_salary_rounding() {
        let schedule = schedule();
        // 4700.25 x 2% = 94.005 -> 94.01
        assert_eq!(
            housing_fund(Money::from_minor(470_025), &schedule),
            Money::from_minor(9_401)
        );
    }
}
