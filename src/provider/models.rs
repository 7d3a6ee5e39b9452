//! Provider API payloads
use serde::{Deserialize, Serialize};

/// Every list endpoint wraps its results in a `data` field
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventWhen {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    pub when: Option<EventWhen>,
    // Older payloads put the start time at the top level
    pub start_time: Option<i64>,
}

impl CalendarEvent {
    /// Start of the event in epoch seconds. All-day events carry a
    /// date instead and return `None`.
    pub fn starts_at(&self) -> Option<i64> {
        self.when
            .as_ref()
            .and_then(|when| when.start_time)
            .or(self.start_time)
    }
}

/// Inclusive epoch-second window for listing events
#[derive(Debug, Clone, PartialEq)]
pub struct EventQuery {
    pub calendar_id: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventWindow {
    pub start_time: i64,
    pub end_time: i64,
    pub start_timezone: String,
    pub end_timezone: String,
}

/// Body of an event creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub busy: bool,
    pub participants: Vec<Participant>,
    pub description: String,
    pub location: String,
    pub when: EventWindow,
}

/// Result of exchanging an authorization code
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub grant_id: String,
    pub expires_in: Option<i64>,
}

/// Status and raw body of a provider write. Non-2xx statuses are
/// returned as-is so callers decide what counts as success.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn is_created(&self) -> bool {
        self.status == 200 || self.status == 201
    }
}
