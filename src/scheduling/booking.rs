//! Book the interview on the recruiter calendar

use chrono::TimeDelta;
use serde::Serialize;

use super::{SchedulingError, time::parse_candidate_time};
use crate::provider::{CalendarProvider, EventWindow, NewEvent, Participant};
use crate::session::Session;

pub const SCHEDULED_MESSAGE: &str = "Interview scheduled successfully!";

/// Fixed parts of every interview event
#[derive(Clone, Debug)]
pub struct InterviewTemplate {
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration_minutes: i64,
    /// Used when the candidate did not leave an address
    pub candidate_email: Option<String>,
    /// Used instead of the signed in user's address
    pub recruiter_email: Option<String>,
}

impl Default for InterviewTemplate {
    fn default() -> Self {
        Self {
            title: "Interview with Candidate".to_string(),
            description: "Interview for the open role.".to_string(),
            location: "Online Interview".to_string(),
            duration_minutes: 60,
            candidate_email: None,
            recruiter_email: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub event: serde_json::Value,
}

impl InterviewTemplate {
    fn participants(&self, session: &Session) -> Vec<Participant> {
        let candidate = session
            .candidate_email()
            .map(str::to_string)
            .or_else(|| self.candidate_email.clone());
        let recruiter = self
            .recruiter_email
            .clone()
            .or_else(|| session.email().map(str::to_string));

        [candidate, recruiter]
            .into_iter()
            .flatten()
            .map(|email| Participant { email })
            .collect()
    }

    /// Build the event for a slot starting at `candidate_time`
    pub fn event_for(
        &self,
        candidate_time: &str,
        session: &Session,
    ) -> Result<NewEvent, SchedulingError> {
        let start = parse_candidate_time(candidate_time)?;
        let end = TimeDelta::try_minutes(self.duration_minutes)
            .filter(|delta| *delta > TimeDelta::zero())
            .and_then(|delta| start.checked_add_signed(delta))
            .ok_or_else(|| {
                SchedulingError::InvalidTimeFormat(format!(
                    "{} lasting {} minutes",
                    candidate_time, self.duration_minutes
                ))
            })?;

        Ok(NewEvent {
            title: self.title.clone(),
            busy: true,
            participants: self.participants(session),
            description: self.description.clone(),
            location: self.location.clone(),
            when: EventWindow {
                start_time: start.timestamp(),
                end_time: end.timestamp(),
                start_timezone: "UTC".to_string(),
                end_timezone: "UTC".to_string(),
            },
        })
    }
}

/// Create the interview event. Every precondition is checked before
/// the provider is contacted. Resubmitting creates another event.
pub async fn schedule_interview(
    provider: &dyn CalendarProvider,
    session: &Session,
    template: &InterviewTemplate,
) -> Result<BookingConfirmation, SchedulingError> {
    let access_token = session
        .access_token()
        .ok_or(SchedulingError::Unauthenticated)?;
    let calendar_id = session
        .calendar_id()
        .ok_or(SchedulingError::CalendarNotSelected)?;
    let candidate_time = session
        .candidate_time()
        .ok_or(SchedulingError::MissingStartTime)?;

    let event = template.event_for(candidate_time, session)?;
    let res = provider
        .create_event(access_token, calendar_id, &event)
        .await?;

    if !res.is_created() {
        tracing::warn!("Provider rejected booking with {}: {}", res.status, res.body);
        return Err(SchedulingError::BookingRejected {
            status: res.status,
            body: res.body,
        });
    }

    let event: serde_json::Value = serde_json::from_str(&res.body)
        .map_err(|e| SchedulingError::InternalBookingError(e.to_string()))?;
    tracing::info!("Booked interview at {} on {}", candidate_time, calendar_id);

    Ok(BookingConfirmation {
        message: SCHEDULED_MESSAGE.to_string(),
        event,
    })
}
