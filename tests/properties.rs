//! Property tests for the contribution calculators and pay-period
//! aggregation.
//!
//! These pin down the behavior the portal relies on: every calculator is
//! total and monotonic non-decreasing, contributions stay inside their
//! statutory bounds, the two social insurance modes agree on the regular
//! component, net pay never goes negative, and the whole computation is
//! deterministic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    compute_pay_period, health_insurance, housing_fund, social_insurance,
    social_insurance_formula,
};
use payroll_engine::config::standard_schedules;
use payroll_engine::models::{DEFAULT_OVERTIME_MULTIPLIER, Money, PayPeriodInput};

/// Salaries up to 2,000,000.00 in minor units, well past every cap.
fn salary() -> impl Strategy<Value = Money> {
    (0i64..=200_000_000).prop_map(Money::from_minor)
}

/// An ordered salary pair for monotonicity checks.
fn salary_pair() -> impl Strategy<Value = (Money, Money)> {
    (salary(), salary()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

fn input(rate_minor: i64, regular: i64, overtime: i64, manual_minor: i64) -> PayPeriodInput {
    PayPeriodInput {
        hourly_rate: Money::from_minor(rate_minor),
        regular_hours: Decimal::from(regular),
        overtime_hours: Decimal::from(overtime),
        overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        manual_deductions: Money::from_minor(manual_minor),
    }
}

proptest! {
    #[test]
    fn social_insurance_below_minimum_is_base(minor in 0i64..525_000) {
        let set = standard_schedules();
        prop_assert_eq!(
            social_insurance(Money::from_minor(minor), &set.social),
            Money::from_major(250)
        );
    }

    #[test]
    fn social_insurance_above_table_top_is_cap(minor in 3_475_000i64..=200_000_000) {
        let set = standard_schedules();
        prop_assert_eq!(
            social_insurance(Money::from_minor(minor), &set.social),
            Money::from_major(1_000)
        );
        prop_assert_eq!(
            social_insurance_formula(Money::from_minor(minor), &set.social.formula).regular,
            Money::from_major(1_000)
        );
    }

    #[test]
    fn social_insurance_is_monotonic((a, b) in salary_pair()) {
        let set = standard_schedules();
        prop_assert!(social_insurance(a, &set.social) <= social_insurance(b, &set.social));
    }

    #[test]
    fn social_insurance_stays_in_bounds(s in salary()) {
        let set = standard_schedules();
        let contribution = social_insurance(s, &set.social);
        prop_assert!(contribution >= Money::from_major(250));
        prop_assert!(contribution <= Money::from_major(1_000));
    }

    #[test]
    fn formula_regular_matches_bracket_table(s in salary()) {
        let set = standard_schedules();
        prop_assert_eq!(
            social_insurance_formula(s, &set.social.formula).regular,
            social_insurance(s, &set.social)
        );
    }

    #[test]
    fn formula_supplemental_stays_in_bounds(s in salary()) {
        let set = standard_schedules();
        let supplemental = social_insurance_formula(s, &set.social.formula).supplemental;
        prop_assert!(supplemental >= Money::ZERO);
        prop_assert!(supplemental <= Money::from_major(750));
    }

    #[test]
    fn health_insurance_stays_in_bounds(s in salary()) {
        let set = standard_schedules();
        let contribution = health_insurance(s, &set.health);
        prop_assert!(contribution >= Money::from_major(250));
        prop_assert!(contribution <= Money::from_major(2_500));
    }

    #[test]
    fn health_insurance_is_monotonic((a, b) in salary_pair()) {
        let set = standard_schedules();
        prop_assert!(health_insurance(a, &set.health) <= health_insurance(b, &set.health));
    }

    #[test]
    fn health_insurance_constant_outside_floor_and_cap(minor in 0i64..=1_000_000) {
        let set = standard_schedules();
        prop_assert_eq!(
            health_insurance(Money::from_minor(minor), &set.health),
            Money::from_major(250)
        );
        prop_assert_eq!(
            health_insurance(Money::from_minor(10_000_000 + minor), &set.health),
            Money::from_major(2_500)
        );
    }

    #[test]
    fn housing_fund_never_exceeds_cap(s in salary()) {
        let set = standard_schedules();
        prop_assert!(housing_fund(s, &set.housing) <= Money::from_major(200));
    }

    #[test]
    fn housing_fund_is_one_percent_below_threshold(minor in 0i64..=150_000) {
        let set = standard_schedules();
        let s = Money::from_minor(minor);
        prop_assert_eq!(
            housing_fund(s, &set.housing),
            s.mul_decimal(Decimal::new(1, 2))
        );
    }

    #[test]
    fn housing_fund_is_monotonic((a, b) in salary_pair()) {
        let set = standard_schedules();
        prop_assert!(housing_fund(a, &set.housing) <= housing_fund(b, &set.housing));
    }

    #[test]
    fn net_pay_is_never_negative(
        rate_minor in 0i64..=1_000_000,
        regular in 0i64..=400,
        overtime in 0i64..=100,
        manual_minor in 0i64..=1_000_000_000,
    ) {
        let set = standard_schedules();
        let result = compute_pay_period(&input(rate_minor, regular, overtime, manual_minor), &set)
            .expect("non-negative inputs are valid");
        prop_assert!(result.net_pay >= Money::ZERO);
    }

    #[test]
    fn net_pay_identity_holds(
        rate_minor in 0i64..=1_000_000,
        regular in 0i64..=400,
        overtime in 0i64..=100,
        manual_minor in 0i64..=10_000_000,
    ) {
        let set = standard_schedules();
        let result = compute_pay_period(&input(rate_minor, regular, overtime, manual_minor), &set)
            .expect("non-negative inputs are valid");

        prop_assert_eq!(result.gross_pay, result.basic_pay + result.overtime_pay);
        prop_assert_eq!(
            result.total_deductions,
            result.social_insurance
                + result.health_insurance
                + result.housing_fund
                + result.tax_withholding
                + Money::from_minor(manual_minor)
        );
        prop_assert_eq!(
            result.net_pay,
            (result.gross_pay - result.total_deductions).max(Money::ZERO)
        );
    }

    #[test]
    fn computation_is_deterministic(
        rate_minor in 0i64..=1_000_000,
        regular in 0i64..=400,
        overtime in 0i64..=100,
    ) {
        let set = standard_schedules();
        let period = input(rate_minor, regular, overtime, 0);
        let first = compute_pay_period(&period, &set).expect("valid input");
        let second = compute_pay_period(&period, &set).expect("valid input");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn negative_hours_always_rejected(regular in -400i64..0) {
        let set = standard_schedules();
        let mut period = input(5_875, 80, 0, 0);
        period.regular_hours = Decimal::from(regular);
        prop_assert!(compute_pay_period(&period, &set).is_err());
    }
}
