use thiserror::Error;

use crate::provider::ProviderError;

/// Failures of the scheduling workflows. Each variant maps to exactly
/// one HTTP response in `api::public`.
#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("Missing authorization code!")]
    MissingCode,
    #[error("User not authenticated!")]
    Unauthenticated,
    #[error("User not authenticated or calendar not selected!")]
    CalendarNotSelected,
    #[error("No calendars found for the authenticated user.")]
    NoCalendarsFound,
    #[error("No calendar matches the recruiter selection {0}")]
    RecruiterCalendarNotFound(String),
    #[error("No available slots for the recruiter.")]
    NoAvailableSlots,
    #[error("start_time is required")]
    MissingStartTime,
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("Calendar provider responded with {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("{body}")]
    BookingRejected { status: u16, body: String },
    #[error("Calendar provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Unexpected response from calendar provider: {0}")]
    InvalidProviderResponse(String),
    #[error("{0}")]
    InternalBookingError(String),
}

impl From<ProviderError> for SchedulingError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout(msg) | ProviderError::Transport(msg) => {
                Self::ProviderUnavailable(msg)
            }
            ProviderError::Status { status, body } => Self::Provider { status, body },
            ProviderError::Decode(msg) => Self::InvalidProviderResponse(msg),
        }
    }
}
