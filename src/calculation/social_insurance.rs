//! Social insurance contribution calculation.
//!
//! Two computations co-exist because the portal's source carried two
//! divergent implementations of this scheme. The bracket table is the
//! system of record: [`social_insurance`] looks the salary up in the
//! ordered table and is what the pay-period computation uses. The legacy
//! piecewise formula is kept as an explicitly named alternative,
//! [`social_insurance_formula`]; its regular component matches the table
//! for every salary, and it additionally reports the supplemental
//! contribution that activates above the supplemental threshold. The two
//! modes are never mixed.

use crate::config::{SocialFormulaParams, SocialInsuranceSchedule};
use crate::models::Money;

/// Returns the employee-share social insurance contribution for a salary.
///
/// Selects the bracket containing `basic_pay` from the ordered table.
/// Total over all inputs: salaries above the top bracket's lower bound
/// fall into the unbounded top bracket, and salaries below zero clamp to
/// the bottom bracket. For the standard table the result is always in
/// `[250.00, 1000.00]` and non-decreasing in the salary.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::social_insurance;
/// use payroll_engine::config::standard_schedules;
/// use payroll_engine::models::Money;
///
/// let set = standard_schedules();
/// let contribution = social_insurance(Money::from_major(4700), &set.social);
/// assert_eq!(contribution, Money::from_major(250));
/// ```
pub fn social_insurance(basic_pay: Money, schedule: &SocialInsuranceSchedule) -> Money {
    match schedule.brackets.iter().find(|b| b.contains(basic_pay)) {
        Some(bracket) => bracket.contribution,
        // Below the first lower bound; clamp to the bottom bracket.
        None => schedule
            .brackets
            .first()
            .map(|b| b.contribution)
            .unwrap_or(Money::ZERO),
    }
}

/// The breakdown produced by the legacy formula mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaContribution {
    /// The regular contribution component (matches the bracket table).
    pub regular: Money,
    /// The supplemental component, zero until the salary exceeds the
    /// supplemental threshold, then capped.
    pub supplemental: Money,
}

impl FormulaContribution {
    /// The combined regular and supplemental contribution.
    pub fn total(&self) -> Money {
        self.regular + self.supplemental
    }
}

/// Legacy formula mode for the social insurance contribution.
///
/// Piecewise linear approximation: below `min_salary` the regular
/// component is the base contribution; above it, the contribution rises
/// by `step_increment` per `step_size` of salary, capped at `regular_cap`.
/// The supplemental component activates once the salary reaches
/// `supplemental_threshold`, rises on the same step grid, and caps at
/// `supplemental_cap`.
///
/// Under the standard parameters the regular component agrees with the
/// bracket table at every salary; the supplemental component is what made
/// the two source implementations diverge, which is why this mode exists
/// only under its own name.
pub fn social_insurance_formula(
    basic_pay: Money,
    params: &SocialFormulaParams,
) -> FormulaContribution {
    let regular = if basic_pay < params.min_salary {
        params.base_contribution
    } else {
        let steps = (basic_pay.minor() - params.min_salary.minor()) / params.step_size.minor() + 1;
        let raised = params.base_contribution.minor() + steps * params.step_increment.minor();
        Money::from_minor(raised).min(params.regular_cap)
    };

    let supplemental = if basic_pay < params.supplemental_threshold {
        Money::ZERO
    } else {
        let steps = (basic_pay.minor() - params.supplemental_threshold.minor())
            / params.step_size.minor()
            + 1;
        Money::from_minor(steps * params.supplemental_step.minor()).min(params.supplemental_cap)
    };

    FormulaContribution {
        regular,
        supplemental,
    }
}
