use std::env;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Context, Result, ensure};

use crate::scheduling::{AvailabilityOptions, InterviewTemplate, RecruiterCalendar};

pub const DEFAULT_API_URI: &str = "https://api.us.nylas.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub nylas_api_uri: String,
    pub nylas_api_key: String,
    pub nylas_client_id: String,
    pub nylas_client_secret: String,
    pub nylas_redirect_uri: String,
    pub nylas_scope: Option<String>,
    pub recruiter_calendar: RecruiterCalendar,
    pub strict_conflict_check: bool,
    pub lookahead_days: i64,
    pub request_timeout_secs: u64,
    pub candidate_email: Option<String>,
    pub recruiter_email: Option<String>,
    pub interview_minutes: i64,
}

impl AppConfig {
    /// Read configuration from the process environment. Provider
    /// credentials are not validated, only malformed or out of range
    /// scheduler settings are errors.
    pub fn from_env() -> Result<Self> {
        let nylas_api_uri = env::var("NYLAS_API_URI").unwrap_or_else(|_| DEFAULT_API_URI.to_string());
        let nylas_api_key = env::var("NYLAS_API_KEY").unwrap_or_default();
        let nylas_client_id = env::var("NYLAS_CLIENT_ID").unwrap_or_default();
        let nylas_client_secret = env::var("NYLAS_CLIENT_SECRET").unwrap_or_default();
        let nylas_redirect_uri = env::var("NYLAS_REDIRECT_URI")
            .unwrap_or_else(|_| "http://127.0.0.1:5000/oauth/callback".to_string());
        let nylas_scope = optional_var("NYLAS_SCOPE");

        let recruiter_calendar = parse_var("SCHEDULER_RECRUITER_CALENDAR", RecruiterCalendar::default())?;
        let strict_conflict_check = parse_var("SCHEDULER_STRICT_CONFLICT_CHECK", false)?;
        let lookahead_days = parse_bounded("SCHEDULER_LOOKAHEAD_DAYS", 30, 1..=365)?;
        let request_timeout_secs = parse_bounded("SCHEDULER_REQUEST_TIMEOUT_SECS", 15, 1..=600)?;
        let interview_minutes = parse_bounded("SCHEDULER_INTERVIEW_MINUTES", 60, 1..=1440)?;
        let candidate_email = optional_var("SCHEDULER_CANDIDATE_EMAIL");
        let recruiter_email = optional_var("SCHEDULER_RECRUITER_EMAIL");

        Ok(Self {
            nylas_api_uri,
            nylas_api_key,
            nylas_client_id,
            nylas_client_secret,
            nylas_redirect_uri,
            nylas_scope,
            recruiter_calendar,
            strict_conflict_check,
            lookahead_days,
            request_timeout_secs,
            candidate_email,
            recruiter_email,
            interview_minutes,
        })
    }

    pub fn availability_options(&self) -> AvailabilityOptions {
        AvailabilityOptions {
            recruiter_calendar: self.recruiter_calendar.clone(),
            strict_conflict_check: self.strict_conflict_check,
            lookahead_days: self.lookahead_days,
        }
    }

    pub fn interview_template(&self) -> InterviewTemplate {
        InterviewTemplate {
            duration_minutes: self.interview_minutes,
            candidate_email: self.candidate_email.clone(),
            recruiter_email: self.recruiter_email.clone(),
            ..InterviewTemplate::default()
        }
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {}", key, raw)),
        None => Ok(default),
    }
}

fn parse_bounded<T>(key: &str, default: T, range: RangeInclusive<T>) -> Result<T>
where
    T: FromStr + PartialOrd + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = parse_var(key, default)?;
    ensure!(
        range.contains(&value),
        "Invalid value for {}: {} is outside {}..={}",
        key,
        value,
        range.start(),
        range.end()
    );
    Ok(value)
}
