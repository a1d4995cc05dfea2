//! Compiled-in current statutory schedules.
//!
//! The engine must be able to start and serve computations without any
//! schedule files on disk, so the schedule set currently in force is
//! compiled in. `config/schedules/2025-01-01.yaml` ships the same table
//! for deployments that prefer file-based configuration; the integration
//! suite keeps the two in agreement.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    ContributionBracket, HealthInsuranceSchedule, HousingFundSchedule, ScheduleSet,
    SocialFormulaParams, SocialInsuranceSchedule,
};
use crate::models::Money;

/// Social insurance bracket rows as `(lower bound, employee contribution)`
/// in whole currency units. Each row's upper bound is the next row's lower
/// bound; the last row is unbounded. Contributions step by 25 per 500 of
/// salary and plateau at 1000.
const SOCIAL_BRACKET_ROWS: [(i64, i64); 31] = [
    (0, 250),
    (5_250, 275),
    (5_750, 300),
    (6_250, 325),
    (6_750, 350),
    (7_250, 375),
    (7_750, 400),
    (8_250, 425),
    (8_750, 450),
    (9_250, 475),
    (9_750, 500),
    (10_250, 525),
    (10_750, 550),
    (11_250, 575),
    (11_750, 600),
    (12_250, 625),
    (12_750, 650),
    (13_250, 675),
    (13_750, 700),
    (14_250, 725),
    (14_750, 750),
    (15_250, 775),
    (15_750, 800),
    (16_250, 825),
    (16_750, 850),
    (17_250, 875),
    (17_750, 900),
    (18_250, 925),
    (18_750, 950),
    (19_250, 975),
    (19_750, 1_000),
];

/// Returns the statutory contribution schedules in force from 2025-01-01.
pub fn standard_schedules() -> ScheduleSet {
    let brackets = SOCIAL_BRACKET_ROWS
        .iter()
        .enumerate()
        .map(|(i, &(lower, contribution))| ContributionBracket {
            lower: Money::from_major(lower),
            upper: SOCIAL_BRACKET_ROWS
                .get(i + 1)
                .map(|&(next_lower, _)| Money::from_major(next_lower)),
            contribution: Money::from_major(contribution),
        })
        .collect();

    ScheduleSet {
        effective: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
        social: SocialInsuranceSchedule {
            brackets,
            formula: SocialFormulaParams {
                min_salary: Money::from_major(5_250),
                base_contribution: Money::from_major(250),
                step_size: Money::from_major(500),
                step_increment: Money::from_major(25),
                regular_cap: Money::from_major(1_000),
                supplemental_threshold: Money::from_major(20_250),
                supplemental_step: Money::from_major(25),
                supplemental_cap: Money::from_major(750),
            },
        },
        health: HealthInsuranceSchedule {
            rate: Decimal::new(5, 2),
            salary_floor: Money::from_major(10_000),
            salary_cap: Money::from_major(100_000),
            employee_share: Decimal::new(5, 1),
        },
        housing: HousingFundSchedule {
            low_rate: Decimal::new(1, 2),
            high_rate: Decimal::new(2, 2),
            low_threshold: Money::from_major(1_500),
            base_cap: Money::from_major(10_000),
            contribution_cap: Money::from_major(200),
        },
    }
}
