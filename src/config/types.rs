//! Contribution schedule types.
//!
//! This module contains the strongly-typed rate-schedule structures that are
//! either compiled in (see [`crate::config::standard_schedules`]) or
//! deserialized from YAML schedule files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Money;

/// One row of a bracket-table schedule: a contiguous salary range mapped
/// to a flat employee-share contribution amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBracket {
    /// Inclusive lower salary bound.
    pub lower: Money,
    /// Exclusive upper salary bound; `None` means unbounded (the top
    /// bracket covers every salary at or above its lower bound).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Money>,
    /// The employee-share contribution for salaries in this bracket.
    pub contribution: Money,
}

impl ContributionBracket {
    /// Returns true if `salary` falls within this bracket.
    pub fn contains(&self, salary: Money) -> bool {
        salary >= self.lower && self.upper.is_none_or(|upper| salary < upper)
    }
}

/// Parameters for the legacy piecewise-linear social insurance formula.
///
/// The portal's source carried this approximation alongside the bracket
/// table; the two disagree above the supplemental threshold, so the
/// formula is kept only as an explicitly named alternative mode (see
/// [`crate::calculation::social_insurance_formula`]) and is never mixed
/// into the bracket-table computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialFormulaParams {
    /// Salaries below this threshold pay the base contribution.
    pub min_salary: Money,
    /// Contribution at and below the minimum threshold.
    pub base_contribution: Money,
    /// Width of each salary step above the minimum threshold.
    pub step_size: Money,
    /// Contribution increase per salary step.
    pub step_increment: Money,
    /// Cap on the regular contribution component.
    pub regular_cap: Money,
    /// Salary at which the supplemental contribution activates.
    pub supplemental_threshold: Money,
    /// Supplemental contribution increase per salary step.
    pub supplemental_step: Money,
    /// Cap on the supplemental contribution component.
    pub supplemental_cap: Money,
}

/// The social insurance schedule: the bracket table (system of record)
/// plus the legacy formula parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialInsuranceSchedule {
    /// Ordered, contiguous salary brackets.
    pub brackets: Vec<ContributionBracket>,
    /// Legacy formula parameters.
    pub formula: SocialFormulaParams,
}

/// The health insurance schedule: a flat percentage of basic pay, with the
/// salary base clamped into `[salary_floor, salary_cap]` and the premium
/// split between employer and employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInsuranceSchedule {
    /// Premium rate applied to the clamped salary base.
    pub rate: Decimal,
    /// Minimum salary base.
    pub salary_floor: Money,
    /// Maximum salary base.
    pub salary_cap: Money,
    /// Fraction of the premium borne by the employee.
    pub employee_share: Decimal,
}

/// The housing fund schedule: a tiered percentage of basic pay with a
/// capped contribution base and a hard contribution ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingFundSchedule {
    /// Rate for salaries at or below the low threshold.
    pub low_rate: Decimal,
    /// Rate for salaries above the low threshold.
    pub high_rate: Decimal,
    /// Salary threshold separating the two rates.
    pub low_threshold: Money,
    /// Maximum salary base the rate is applied to.
    pub base_cap: Money,
    /// Hard ceiling on the contribution itself.
    pub contribution_cap: Money,
}

/// The complete set of contribution schedules in force from a given date.
///
/// Loaded once at process start and never mutated; a new rate year is a
/// new `ScheduleSet` value, not an edit to an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSet {
    /// The date from which these schedules apply.
    pub effective: NaiveDate,
    /// Social insurance schedule.
    pub social: SocialInsuranceSchedule,
    /// Health insurance schedule.
    pub health: HealthInsuranceSchedule,
    /// Housing fund schedule.
    pub housing: HousingFundSchedule,
}

impl ScheduleSet {
    /// Checks the structural invariants of the schedule set.
    ///
    /// The social bracket table must start at zero, be ascending and
    /// contiguous (each upper bound equal to the next lower bound), end
    /// with a single unbounded bracket, and carry non-decreasing
    /// contributions. Violations are configuration defects, reported as
    /// [`PayrollError::InvalidSchedule`] and fatal at load time.
    pub fn validate(&self) -> PayrollResult<()> {
        let brackets = &self.social.brackets;

        let first = brackets.first().ok_or_else(|| {
            social_invalid("bracket table is empty")
        })?;
        if first.lower != Money::ZERO {
            return Err(social_invalid(&format!(
                "first bracket must start at 0.00, starts at {}",
                first.lower
            )));
        }

        for pair in brackets.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            match current.upper {
                Some(upper) if upper == next.lower => {}
                Some(upper) => {
                    return Err(social_invalid(&format!(
                        "brackets are not contiguous at {}",
                        upper
                    )));
                }
                None => {
                    return Err(social_invalid(
                        "only the last bracket may be unbounded",
                    ));
                }
            }
            if next.contribution < current.contribution {
                return Err(social_invalid(&format!(
                    "contributions decrease at {}",
                    next.lower
                )));
            }
        }

        match brackets.last() {
            Some(last) if last.upper.is_none() => {}
            _ => {
                return Err(social_invalid(
                    "last bracket must be unbounded",
                ));
            }
        }

        if self.health.salary_floor > self.health.salary_cap {
            return Err(PayrollError::InvalidSchedule {
                scheme: "health_insurance".to_string(),
                message: "salary floor exceeds salary cap".to_string(),
            });
        }

        Ok(())
    }
}

fn social_invalid(message: &str) -> PayrollError {
    PayrollError::InvalidSchedule {
        scheme: "social_insurance".to_string(),
        message: message.to_string(),
    }
}
