//! Error types for the payroll deduction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pay computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll deduction engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/schedules".to_string(),
/// };
/// assert_eq!(error.to_string(), "Schedule file not found: /missing/schedules");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A pay-period input field was out of range (negative hours, rate,
    /// or deduction). Rejected rather than clamped so that data-entry
    /// mistakes surface upstream.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No contribution schedule is configured for the requested date.
    /// This is a configuration failure, fatal at startup, not a
    /// per-request condition.
    #[error("No contribution schedule configured for date {date}")]
    UnconfiguredSchedule {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// A contribution schedule violated a structural invariant
    /// (unordered, overlapping, or non-contiguous brackets).
    #[error("Invalid {scheme} schedule: {message}")]
    InvalidSchedule {
        /// The contribution scheme whose schedule was invalid.
        scheme: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// Schedule file was not found at the specified path.
    #[error("Schedule file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Schedule file could not be parsed.
    #[error("Failed to parse schedule file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
