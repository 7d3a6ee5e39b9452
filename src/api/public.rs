//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::scheduling::SchedulingError;

// Errors

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "providerStatus", skip_serializing_if = "Option::is_none")]
    pub provider_status: Option<u16>,
}

#[derive(Debug)]
pub enum ApiError {
    Scheduling(SchedulingError),
    Render(handlebars::RenderError),
}

/// Provider statuses are passed through as long as they are errors,
/// anything else the provider sends on a failed call becomes 502.
fn passthrough(status: u16) -> StatusCode {
    StatusCode::from_u16(status)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

pub fn status_for(err: &SchedulingError) -> StatusCode {
    use SchedulingError::*;

    match err {
        MissingCode | MissingStartTime | InvalidTimeFormat(_) => StatusCode::BAD_REQUEST,
        Unauthenticated | CalendarNotSelected => StatusCode::UNAUTHORIZED,
        NoCalendarsFound | RecruiterCalendarNotFound(_) | NoAvailableSlots => {
            StatusCode::NOT_FOUND
        }
        Provider { status, .. } | BookingRejected { status, .. } => passthrough(*status),
        ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        InvalidProviderResponse(_) => StatusCode::BAD_GATEWAY,
        InternalBookingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Scheduling(err) => {
                let provider_status = match &err {
                    SchedulingError::Provider { status, .. }
                    | SchedulingError::BookingRejected { status, .. } => Some(*status),
                    _ => None,
                };
                let body = ErrorResponse {
                    error: err.to_string(),
                    provider_status,
                };
                (status_for(&err), body)
            }
            ApiError::Render(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: format!("Failed to render page: {}", err),
                    provider_status: None,
                },
            ),
        };

        if status.is_server_error() {
            tracing::error!("{} {}", status, body.error);
        } else {
            tracing::debug!("{} {}", status, body.error);
        }

        (status, Json(body)).into_response()
    }
}

impl From<SchedulingError> for ApiError {
    fn from(err: SchedulingError) -> Self {
        Self::Scheduling(err)
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Render(err)
    }
}

// Re-export public types from each route

pub mod auth {
    pub use crate::api::routes::auth::public::*;
}

pub mod calendars {
    pub use crate::api::routes::calendars::public::*;
}

pub mod candidate {
    pub use crate::api::routes::candidate::public::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&SchedulingError::MissingCode),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&SchedulingError::CalendarNotSelected),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&SchedulingError::RecruiterCalendarNotFound("index:1".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&SchedulingError::ProviderUnavailable("timeout".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_provider_status_passthrough() {
        let rejected = SchedulingError::BookingRejected {
            status: 409,
            body: "conflict".into(),
        };
        assert_eq!(status_for(&rejected), StatusCode::CONFLICT);

        let odd = SchedulingError::BookingRejected {
            status: 202,
            body: "accepted".into(),
        };
        assert_eq!(status_for(&odd), StatusCode::BAD_GATEWAY);
    }
}
