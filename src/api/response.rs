//! Response types for the payroll deduction engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{Money, PayPeriodResult};

/// Success body for the `/compute` endpoint.
///
/// All monetary fields carry exactly two decimal digits; currency
/// formatting for display is the consumer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    /// Correlation ID assigned to this request.
    pub correlation_id: Uuid,
    /// When the computation ran.
    pub computed_at: DateTime<Utc>,
    /// Effective date of the schedule set that was applied.
    pub schedule_effective: NaiveDate,
    /// Pay for regular hours.
    pub basic_pay: Money,
    /// Pay for overtime hours.
    pub overtime_pay: Money,
    /// Basic plus overtime pay.
    pub gross_pay: Money,
    /// Employee-share social insurance contribution.
    pub social_insurance: Money,
    /// Employee-share health insurance contribution.
    pub health_insurance: Money,
    /// Housing fund contribution.
    pub housing_fund: Money,
    /// Withholding tax (always zero until configured).
    pub tax_withholding: Money,
    /// Sum of all deductions.
    pub total_deductions: Money,
    /// Gross pay minus deductions, floored at zero.
    pub net_pay: Money,
}

impl ComputeResponse {
    /// Builds a response from a computation result.
    pub fn from_result(
        result: PayPeriodResult,
        correlation_id: Uuid,
        schedule_effective: NaiveDate,
    ) -> Self {
        Self {
            correlation_id,
            computed_at: Utc::now(),
            schedule_effective,
            basic_pay: result.basic_pay,
            overtime_pay: result.overtime_pay,
            gross_pay: result.gross_pay,
            social_insurance: result.social_insurance,
            health_insurance: result.health_insurance,
            housing_fund: result.housing_fund,
            tax_withholding: result.tax_withholding,
            total_deductions: result.total_deductions,
            net_pay: result.net_pay,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    "The pay period input contains invalid values",
                ),
            },
            PayrollError::UnconfiguredSchedule { date } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SCHEDULE_NOT_CONFIGURED",
                    format!("No contribution schedule configured for date {}", date),
                    "The engine has no schedule set covering the requested date",
                ),
            },
            PayrollError::InvalidSchedule { scheme, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid {} schedule", scheme),
                    message,
                ),
            },
            PayrollError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Schedule file not found: {}", path),
                ),
            },
            PayrollError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
