//! Pay-period computation result model.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// The complete breakdown of one pay-period computation.
///
/// An immutable value produced fresh per computation. All fields are
/// fixed-point amounts with exactly two decimal digits; display-layer
/// currency formatting is the consumer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodResult {
    /// Pay for regular hours (`hourly_rate x regular_hours`). The base
    /// figure for all statutory contributions.
    pub basic_pay: Money,
    /// Pay for overtime hours (`hourly_rate x multiplier x overtime_hours`).
    pub overtime_pay: Money,
    /// Basic pay plus overtime pay, before deductions.
    pub gross_pay: Money,
    /// Employee-share social insurance contribution.
    pub social_insurance: Money,
    /// Employee-share health insurance contribution.
    pub health_insurance: Money,
    /// Housing fund contribution.
    pub housing_fund: Money,
    /// Withholding tax. Not yet configured; always zero, kept in the
    /// contract so activating it later does not break consumers.
    pub tax_withholding: Money,
    /// Sum of all statutory contributions, tax, and manual deductions.
    pub total_deductions: Money,
    /// Gross pay minus total deductions, floored at zero.
    pub net_pay: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_two_decimal_amounts() {
        let result = PayPeriodResult {
            basic_pay: Money::from_major(4700),
            overtime_pay: Money::from_minor(36719),
            gross_pay: Money::from_minor(506719),
            social_insurance: Money::from_major(250),
            health_insurance: Money::from_major(250),
            housing_fund: Money::from_major(94),
            tax_withholding: Money::ZERO,
            total_deductions: Money::from_major(594),
            net_pay: Money::from_minor(447319),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["basic_pay"], "4700.00");
        assert_eq!(json["overtime_pay"], "367.19");
        assert_eq!(json["net_pay"], "4473.19");
        assert_eq!(json["tax_withholding"], "0.00");
    }

    #[test]
    fn test_round_trips_through_json() {
        let result = PayPeriodResult {
            basic_pay: Money::from_major(4700),
            overtime_pay: Money::ZERO,
            gross_pay: Money::from_major(4700),
            social_insurance: Money::from_major(250),
            health_insurance: Money::from_major(250),
            housing_fund: Money::from_major(94),
            tax_withholding: Money::ZERO,
            total_deductions: Money::from_major(594),
            net_pay: Money::from_major(4106),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: PayPeriodResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
