//! Pay-period input model.
//!
//! This module contains the [`PayPeriodInput`] type describing the hours and
//! rate for one employee's pay period, together with its validation rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Money;

/// The default overtime multiplier (25% loading on the hourly rate).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// The hours and rate inputs for one pay-period computation.
///
/// Hours are decimal so that partial hours (7.5, 0.25) carry through the
/// pay product without premature rounding. Inputs can change between calls
/// for the same employee and period as timesheet corrections land, so a
/// result is always computed fresh from the current input, never cached.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Money, PayPeriodInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayPeriodInput {
///     hourly_rate: Money::from_decimal(Decimal::from_str("58.75").unwrap()),
///     regular_hours: Decimal::from(80),
///     overtime_hours: Decimal::from(5),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
///     manual_deductions: Money::ZERO,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayPeriodInput {
    /// The employee's hourly rate.
    pub hourly_rate: Money,
    /// Regular hours worked during the period.
    pub regular_hours: Decimal,
    /// Overtime hours worked during the period.
    pub overtime_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Ad-hoc deduction entered by payroll staff for this period.
    pub manual_deductions: Money,
}

impl PayPeriodInput {
    /// Validates the input fields.
    ///
    /// Negative hours, rate, multiplier, or manual deduction are rejected
    /// with [`PayrollError::InvalidInput`] rather than clamped. The input
    /// widgets clamp at the UI layer already; this validation exists so
    /// that bad upstream data surfaces as an error instead of a silently
    /// wrong pay figure.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.hourly_rate.is_negative() {
            return Err(invalid("hourly_rate"));
        }
        if self.regular_hours.is_sign_negative() {
            return Err(invalid("regular_hours"));
        }
        if self.overtime_hours.is_sign_negative() {
            return Err(invalid("overtime_hours"));
        }
        if self.overtime_multiplier.is_sign_negative() {
            return Err(invalid("overtime_multiplier"));
        }
        if self.manual_deductions.is_negative() {
            return Err(invalid("manual_deductions"));
        }
        Ok(())
    }
}

fn invalid(field: &str) -> PayrollError {
    PayrollError::InvalidInput {
        field: field.to_string(),
        message: "must not be negative".to_string(),
    }
}
