//! Core data models for the payroll deduction engine.
//!
//! This module contains the domain value types used throughout the engine.

mod money;
mod pay_period;
mod result;

pub use money::Money;
pub use pay_period::{DEFAULT_OVERTIME_MULTIPLIER, PayPeriodInput};
pub use result::PayPeriodResult;
