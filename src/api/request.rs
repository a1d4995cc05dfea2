//! Request types for the payroll deduction engine API.
//!
//! This module defines the JSON request structure for the `/compute`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_OVERTIME_MULTIPLIER, Money, PayPeriodInput};

/// Request body for the `/compute` endpoint.
///
/// Monetary fields accept JSON numbers or strings; the engine converts
/// them to fixed-point minor units at this boundary. The caller's
/// authorization gate decides who may invoke the endpoint; no role
/// information appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
    /// Regular hours worked during the period.
    pub regular_hours: Decimal,
    /// Overtime hours worked during the period.
    pub overtime_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Ad-hoc deduction entered by payroll staff for this period.
    #[serde(default)]
    pub manual_deductions: Decimal,
    /// The date selecting which contribution schedules apply.
    /// Defaults to the current date when omitted.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl From<&ComputeRequest> for PayPeriodInput {
    fn from(req: &ComputeRequest) -> Self {
        PayPeriodInput {
            hourly_rate: Money::from_decimal(req.hourly_rate),
            regular_hours: req.regular_hours,
            overtime_hours: req.overtime_hours,
            overtime_multiplier: req.overtime_multiplier,
            manual_deductions: Money::from_decimal(req.manual_deductions),
        }
    }
}
