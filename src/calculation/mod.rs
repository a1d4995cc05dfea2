//! Calculation logic for the payroll deduction engine.
//!
//! This module contains the pure contribution calculators for each
//! statutory scheme (social insurance in its bracket-table and legacy
//! formula modes, health insurance, and the housing fund) and the
//! pay-period aggregation that combines them with gross pay.

mod health_insurance;
mod housing_fund;
mod pay_period;
mod social_insurance;

pub use health_insurance::health_insurance;
pub use housing_fund::housing_fund;
pub use pay_period::compute_pay_period;
pub use social_insurance::{FormulaContribution, social_insurance, social_insurance_formula};
