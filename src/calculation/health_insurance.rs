//! Health insurance contribution calculation.
//!
//! The portal's source duplicated this formula verbatim across UI files
//! and a helper module; this function is the single copy.

use crate::config::HealthInsuranceSchedule;
use crate::models::Money;

/// Returns the employee-share health insurance contribution for a salary.
///
/// The salary base is clamped into `[salary_floor, salary_cap]`, the
/// premium rate is applied, and only the employee's share of the premium
/// is returned (the employer pays the rest). Total over all inputs; for
/// the standard schedule (5% premium split evenly, floor 10000, cap
/// 100000) the result is always in `[250.00, 2500.00]`: constant below
/// the floor, constant above the cap, increasing in between.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::health_insurance;
/// use payroll_engine::config::standard_schedules;
/// use payroll_engine::models::Money;
///
/// let set = standard_schedules();
/// // Below the salary floor the floor applies: 10000 x 5% / 2 = 250.
/// assert_eq!(health_insurance(Money::from_major(4700), &set.health), Money::from_major(250));
/// ```
pub fn health_insurance(basic_pay: Money, schedule: &HealthInsuranceSchedule) -> Money {
    let base = basic_pay.clamp(schedule.salary_floor, schedule.salary_cap);
    base.mul_decimal(schedule.rate * schedule.employee_share)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::standard_schedules;

    fn schedule() -> HealthInsuranceSchedule {
        standard_schedules().health
    }

    /// HI-001: salaries at or below the floor pay the floor premium
    #[test]
    fn test_floor_region_is_constant() {
        let schedule = schedule();
        assert_eq!(health_insurance(Money::ZERO, &schedule), Money::from_major(250));
        assert_eq!(health_insurance(Money::from_major(4_700), &schedule), Money::from_major(250));
        assert_eq!(health_insurance(Money::from_major(10_000), &schedule), Money::from_major(250));
    }

    /// HI-002: salaries at or above the cap pay the cap premium
    #[test]
    fn test_cap_region_is_constant() {
        let schedule = schedule();
        assert_eq!(
            health_insurance(Money::from_major(100_000), &schedule),
            Money::from_major(2_500)
        );
        assert_eq!(
            health_insurance(Money::from_major(500_000), &schedule),
            Money::from_major(2_500)
        );
    }

    /// HI-003: between floor and cap the employee pays 2.5% of salary
    #[test]
    fn test_between_floor_and_cap() {
        let schedule = schedule();
        assert_eq!(
            health_insurance(Money::from_major(20_000), &schedule),
            Money::from_major(500)
        );
        assert_eq!(
            health_insurance(Money::from_major(50_000), &schedule),
            Money::from_major(1_250)
        );
    }

    /// HI-004: sub-cent results round half away from zero
    #[test]
    fn test_rounding_of_fractional_premium() {
        let schedule = schedule();
        // 10001 x 0.025 = 250.025 -> 250.03
        assert_eq!(
            health_insurance(Money::from_major(10_001), &schedule),
            Money::from_minor(25_003)
        );
        // 10002 x 0.025 = 250.05 exactly
        assert_eq!(
            health_insurance(Money::from_major(10_002), &schedule),
            Money::from_minor(25_005)
        );
    }

    /// HI-005: negative salary clamps up to the floor
    #[test]
    fn test_negative_salary_clamps_to_floor() {
        let schedule = schedule();
        assert_eq!(
            health_insurance(Money::from_major(-5_000), &schedule),
            Money::from_major(250)
        );
    }

    #[test]
    fn test_increasing_between_floor_and_cap() {
        let schedule = schedule();
        let mut previous = Money::ZERO;
        for major in (10_000..=100_000).step_by(5_000) {
            let contribution = health_insurance(Money::from_major(major), &schedule);
            assert!(contribution > previous, "not increasing at salary {}", major);
            previous = contribution;
        }
    }
}
