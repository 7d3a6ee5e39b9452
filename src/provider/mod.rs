//! Client for the calendar provider's REST API.
//!
//! Handlers and workflows only talk to the `CalendarProvider` trait so
//! that tests can swap the HTTP client for an in-memory fake.

mod models;
mod nylas;
#[cfg(test)]
pub(crate) mod fake;

pub use models::*;
pub use nylas::NylasClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request timed out: {0}")]
    Timeout(String),
    #[error("Provider request failed: {0}")]
    Transport(String),
    #[error("Provider responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Consent page the user is redirected to
    fn authorization_url(&self) -> String;

    async fn exchange_code(&self, code: &str) -> Result<TokenGrant, ProviderError>;

    async fn list_calendars(&self, access_token: &str) -> Result<Vec<Calendar>, ProviderError>;

    async fn list_events(
        &self,
        access_token: &str,
        query: &EventQuery,
    ) -> Result<Vec<CalendarEvent>, ProviderError>;

    async fn create_event(
        &self,
        access_token: &str,
        calendar_id: &str,
        event: &NewEvent,
    ) -> Result<ProviderResponse, ProviderError>;
}
