//! Schedule loading functionality.
//!
//! This module provides the [`ScheduleLoader`] type for loading contribution
//! schedules from YAML files, one file per effective date.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::builtin::standard_schedules;
use super::types::ScheduleSet;
use crate::error::{PayrollError, PayrollResult};

/// Loads and provides access to contribution schedules.
///
/// The `ScheduleLoader` reads YAML schedule files from a directory and
/// answers "which schedule set applies on this date". Schedules are loaded
/// once at process start and shared read-only afterwards; a hosting
/// service wraps the loader in an `Arc` and never mutates it.
///
/// # Directory Structure
///
/// Each file in the directory is one complete schedule set, conventionally
/// named by its effective date:
/// ```text
/// config/schedules/
/// └── 2025-01-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ScheduleLoader;
/// use chrono::NaiveDate;
///
/// let loader = ScheduleLoader::load("./config/schedules").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let set = loader.for_date(date).unwrap();
/// println!("Schedules effective from {}", set.effective);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleLoader {
    sets: Vec<ScheduleSet>,
}

impl ScheduleLoader {
    /// Loads schedule sets from every `.yaml` file in the directory.
    ///
    /// Returns an error if the directory is missing or empty, a file
    /// fails to parse, or a parsed schedule violates its structural
    /// invariants. These are startup failures; the hosting service must
    /// not begin serving computations with a partially loaded schedule.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let entries = fs::read_dir(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut sets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| PayrollError::ConfigNotFound {
                path: path_str.clone(),
            })?;
            let file_path = entry.path();
            if file_path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            sets.push(Self::load_file(&file_path)?);
        }

        if sets.is_empty() {
            return Err(PayrollError::ConfigNotFound { path: path_str });
        }

        Ok(Self::from_sets(sets))
    }

    /// Creates a loader backed by the compiled-in standard schedules.
    ///
    /// Lets the engine start with no schedule files on disk.
    pub fn builtin() -> Self {
        Self::from_sets(vec![standard_schedules()])
    }

    /// Creates a loader from already-constructed schedule sets.
    ///
    /// Intended for tests that need deterministic computation against
    /// alternate-year tables without touching the filesystem.
    pub fn from_sets(sets: Vec<ScheduleSet>) -> Self {
        let mut sets = sets;
        sets.sort_by_key(|s| s.effective);
        Self { sets }
    }

    /// Loads and validates a single schedule file.
    fn load_file(path: &Path) -> PayrollResult<ScheduleSet> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let set: ScheduleSet =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        set.validate()?;
        Ok(set)
    }

    /// Returns all loaded schedule sets, sorted by effective date ascending.
    pub fn sets(&self) -> &[ScheduleSet] {
        &self.sets
    }

    /// Returns the schedule set in force on `date`.
    ///
    /// Sets are sorted by effective date ascending, so this finds the most
    /// recent set effective on or before `date` (searching from the end).
    pub fn for_date(&self, date: NaiveDate) -> PayrollResult<&ScheduleSet> {
        self.sets
            .iter()
            .rfind(|s| s.effective <= date)
            .ok_or(PayrollError::UnconfiguredSchedule { date })
    }
}
