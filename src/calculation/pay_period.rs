//! Pay-period aggregation.
//!
//! Combines regular and overtime hours with the hourly rate into gross
//! pay, applies the statutory contributions and any manual deduction, and
//! produces the net figure.

use crate::calculation::{health_insurance, housing_fund, social_insurance};
use crate::config::ScheduleSet;
use crate::error::PayrollResult;
use crate::models::{Money, PayPeriodInput, PayPeriodResult};

/// Computes the full pay breakdown for one pay period.
///
/// Steps:
/// 1. `basic_pay = hourly_rate x regular_hours`
/// 2. `overtime_pay = hourly_rate x overtime_multiplier x overtime_hours`
/// 3. `gross_pay = basic_pay + overtime_pay`
/// 4. Contributions are computed from `basic_pay`, never gross: overtime
///    does not raise statutory contributions.
/// 5. `total_deductions = social + health + housing + tax + manual`,
///    where tax is not yet configured and always zero.
/// 6. `net_pay = max(0, gross_pay - total_deductions)`: a pay period
///    never shows negative net pay, even when manual deductions exceed
///    gross.
///
/// Pure and deterministic: identical inputs produce bit-identical
/// results. Negative inputs are rejected with
/// [`PayrollError::InvalidInput`](crate::error::PayrollError::InvalidInput)
/// before any figure is produced.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_pay_period;
/// use payroll_engine::config::standard_schedules;
/// use payroll_engine::models::{DEFAULT_OVERTIME_MULTIPLIER, Money, PayPeriodInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayPeriodInput {
///     hourly_rate: Money::from_decimal(Decimal::from_str("58.75").unwrap()),
///     regular_hours: Decimal::from(80),
///     overtime_hours: Decimal::from(5),
///     overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
///     manual_deductions: Money::ZERO,
/// };
///
/// let result = compute_pay_period(&input, &standard_schedules()).unwrap();
/// assert_eq!(result.net_pay.to_string(), "4473.19");
/// ```
pub fn compute_pay_period(
    input: &PayPeriodInput,
    schedules: &ScheduleSet,
) -> PayrollResult<PayPeriodResult> {
    input.validate()?;

    let basic_pay = input.hourly_rate.mul_decimal(input.regular_hours);
    // One rounding step for the whole product, not one per factor.
    let overtime_pay = input
        .hourly_rate
        .mul_decimal(input.overtime_multiplier * input.overtime_hours);
    let gross_pay = basic_pay + overtime_pay;

    let social = social_insurance(basic_pay, &schedules.social);
    let health = health_insurance(basic_pay, &schedules.health);
    let housing = housing_fund(basic_pay, &schedules.housing);
    // Withholding tax is not yet configured; the term stays in the sum so
    // activating it later cannot change the contract.
    let tax = Money::ZERO;

    let total_deductions = social + health + housing + tax + input.manual_deductions;
    let net_pay = (gross_pay - total_deductions).max(Money::ZERO);

    Ok(PayPeriodResult {
        basic_pay,
        overtime_pay,
        gross_pay,
        social_insurance: social,
        health_insurance: health,
        housing_fund: housing,
        tax_withholding: tax,
        total_deductions,
        net_pay,
    })
}
