//! Decide whether the candidate's proposed slot is free on the
//! recruiter's calendar.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use super::{SchedulingError, calendars::list_calendars, time::parse_candidate_time};
use crate::provider::{Calendar, CalendarProvider, EventQuery};
use crate::session::Session;

#[derive(Debug, Error)]
#[error("Expected index:<n>, name:<name> or id:<id>, got {0:?}")]
pub struct InvalidCalendarPolicy(String);

/// How the recruiter's calendar is picked out of the grant's calendars
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecruiterCalendar {
    /// Zero-based position in the provider's list
    Position(usize),
    /// Case-insensitive calendar name
    Name(String),
    Id(String),
}

impl Default for RecruiterCalendar {
    fn default() -> Self {
        Self::Position(1)
    }
}

impl fmt::Display for RecruiterCalendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Position(idx) => write!(f, "index:{}", idx),
            Self::Name(name) => write!(f, "name:{}", name),
            Self::Id(id) => write!(f, "id:{}", id),
        }
    }
}

impl FromStr for RecruiterCalendar {
    type Err = InvalidCalendarPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCalendarPolicy(s.to_string());
        let (kind, value) = s.split_once(':').ok_or_else(invalid)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(invalid());
        }
        match kind.trim() {
            "index" => value.parse().map(Self::Position).map_err(|_| invalid()),
            "name" => Ok(Self::Name(value.to_string())),
            "id" => Ok(Self::Id(value.to_string())),
            _ => Err(invalid()),
        }
    }
}

impl RecruiterCalendar {
    pub fn select<'a>(&self, calendars: &'a [Calendar]) -> Option<&'a Calendar> {
        match self {
            Self::Position(idx) => calendars.get(*idx),
            Self::Name(name) => calendars
                .iter()
                .find(|cal| cal.name.eq_ignore_ascii_case(name)),
            Self::Id(id) => calendars.iter().find(|cal| &cal.id == id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AvailabilityOptions {
    pub recruiter_calendar: RecruiterCalendar,
    /// Compare the candidate time as epoch seconds. When off, the raw
    /// candidate text is compared against epoch values and never
    /// matches, so every proposed slot is reported free.
    pub strict_conflict_check: bool,
    pub lookahead_days: i64,
}

impl Default for AvailabilityOptions {
    fn default() -> Self {
        Self {
            recruiter_calendar: RecruiterCalendar::default(),
            strict_conflict_check: false,
            lookahead_days: 30,
        }
    }
}

/// Inclusive epoch-second bounds `[now, now + days]`
pub fn busy_window(now: DateTime<Utc>, days: i64) -> Result<(i64, i64), SchedulingError> {
    let end = TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| {
            SchedulingError::InvalidTimeFormat(format!("lookahead of {} days from {}", days, now))
        })?;
    Ok((now.timestamp(), end.timestamp()))
}

fn is_busy(
    candidate_time: &str,
    busy: &BTreeSet<i64>,
    strict: bool,
) -> Result<bool, SchedulingError> {
    if !strict {
        return Ok(false);
    }
    let start = parse_candidate_time(candidate_time)?;
    Ok(busy.contains(&start.timestamp()))
}

/// Check the candidate time stored in the session against the busy
/// start times of the recruiter calendar. The selected calendar is
/// written to the session as soon as it is known, even if fetching
/// events fails afterwards.
pub async fn check_recruiter_availability(
    provider: &dyn CalendarProvider,
    session: &mut Session,
    options: &AvailabilityOptions,
    now: DateTime<Utc>,
) -> Result<Vec<String>, SchedulingError> {
    let calendars = list_calendars(provider, session).await?;
    let calendar = options
        .recruiter_calendar
        .select(&calendars)
        .ok_or_else(|| {
            SchedulingError::RecruiterCalendarNotFound(format!(
                "{} ({} calendars available)",
                options.recruiter_calendar,
                calendars.len()
            ))
        })?;
    let calendar_id = calendar.id.clone();
    session.calendar_id = Some(calendar_id.clone());

    let (start, end) = busy_window(now, options.lookahead_days)?;
    let query = EventQuery {
        calendar_id,
        start,
        end,
    };
    let access_token = session
        .access_token()
        .ok_or(SchedulingError::Unauthenticated)?;
    let events = provider.list_events(access_token, &query).await?;
    let busy: BTreeSet<i64> = events.iter().filter_map(|e| e.starts_at()).collect();
    tracing::debug!(
        "Calendar {} has {} busy start times",
        query.calendar_id,
        busy.len()
    );

    let mut available = Vec::new();
    if let Some(candidate_time) = session.candidate_time() {
        if !is_busy(candidate_time, &busy, options.strict_conflict_check)? {
            available.push(candidate_time.to_string());
        } else {
            tracing::info!("Candidate time {} conflicts with the recruiter", candidate_time);
        }
    }

    if available.is_empty() {
        return Err(SchedulingError::NoAvailableSlots);
    }
    Ok(available)
}
