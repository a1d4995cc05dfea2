//! HTTP API module for the payroll deduction engine.
//!
//! This module provides the REST endpoint the portal's salary estimator
//! and payroll report service call to compute a pay period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ComputeRequest;
pub use response::{ApiError, ComputeResponse};
pub use state::AppState;
