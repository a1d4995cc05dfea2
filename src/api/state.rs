//! Application state for the payroll deduction engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ScheduleLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers.
/// Schedules are loaded once at startup and read-only afterwards, so
/// concurrent handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded contribution schedules.
    schedules: Arc<ScheduleLoader>,
}

impl AppState {
    /// Creates a new application state with the given schedule loader.
    pub fn new(schedules: ScheduleLoader) -> Self {
        Self {
            schedules: Arc::new(schedules),
        }
    }

    /// Returns a reference to the schedule loader.
    pub fn schedules(&self) -> &ScheduleLoader {
        &self.schedules
    }
}
