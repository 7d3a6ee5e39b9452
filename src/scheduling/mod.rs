//! Interview scheduling workflows: sign in, pick the recruiter
//! calendar, check the candidate slot and book it.

mod auth;
mod availability;
mod booking;
mod calendars;
mod error;
mod time;

pub use auth::complete_auth;
pub use availability::{
    AvailabilityOptions, InvalidCalendarPolicy, RecruiterCalendar, busy_window,
    check_recruiter_availability,
};
pub use booking::{BookingConfirmation, InterviewTemplate, SCHEDULED_MESSAGE, schedule_interview};
pub use calendars::list_calendars;
pub use error::SchedulingError;
pub use time::parse_candidate_time;
