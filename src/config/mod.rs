//! Contribution schedule configuration for the payroll deduction engine.
//!
//! Schedules come from one of two places: the compiled-in
//! [`standard_schedules`] table (the set currently in force) or YAML files
//! loaded through [`ScheduleLoader`] for deployments that manage rate
//! years on disk.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::standard_schedules;
//!
//! let set = standard_schedules();
//! println!("Schedules effective from {}", set.effective);
//! ```

mod builtin;
mod loader;
mod types;

pub use builtin::standard_schedules;
pub use loader::ScheduleLoader;
pub use types::{
    ContributionBracket, HealthInsuranceSchedule, HousingFundSchedule, ScheduleSet,
    SocialFormulaParams, SocialInsuranceSchedule,
};
