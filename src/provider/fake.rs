//! In-memory provider for workflow tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    Calendar, CalendarEvent, CalendarProvider, EventQuery, EventWhen, NewEvent, ProviderError,
    ProviderResponse, TokenGrant,
};

#[derive(Default)]
pub(crate) struct FakeProvider {
    pub calendars: Vec<Calendar>,
    pub busy_starts: Vec<i64>,
    pub create_status: u16,
    pub create_body: String,
    pub fail_transport: bool,
    pub grant_override: Option<TokenGrant>,
    pub event_queries: Mutex<Vec<EventQuery>>,
    pub created: Mutex<Vec<(String, NewEvent)>>,
    pub calls: Mutex<usize>,
}

impl FakeProvider {
    pub fn with_calendars(names: &[&str]) -> Self {
        let calendars = names
            .iter()
            .enumerate()
            .map(|(idx, name)| Calendar {
                id: format!("cal_{}", idx),
                name: name.to_string(),
                read_only: false,
            })
            .collect();
        Self {
            calendars,
            create_status: 200,
            create_body: r#"{"data": {"id": "evt_new"}}"#.to_string(),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) -> Result<(), ProviderError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail_transport {
            return Err(ProviderError::Timeout("operation timed out".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CalendarProvider for FakeProvider {
    fn authorization_url(&self) -> String {
        "https://provider.test/v3/connect/auth?client_id=fake".to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenGrant, ProviderError> {
        self.record_call()?;
        if let Some(grant) = &self.grant_override {
            return Ok(grant.clone());
        }
        Ok(TokenGrant {
            access_token: format!("token_for_{}", code),
            email: "recruiter@example.com".to_string(),
            grant_id: "grant_1".to_string(),
            expires_in: None,
        })
    }

    async fn list_calendars(&self, _access_token: &str) -> Result<Vec<Calendar>, ProviderError> {
        self.record_call()?;
        Ok(self.calendars.clone())
    }

    async fn list_events(
        &self,
        _access_token: &str,
        query: &EventQuery,
    ) -> Result<Vec<CalendarEvent>, ProviderError> {
        self.record_call()?;
        self.event_queries.lock().unwrap().push(query.clone());
        Ok(self
            .busy_starts
            .iter()
            .map(|start| CalendarEvent {
                id: format!("evt_{}", start),
                title: None,
                when: Some(EventWhen {
                    start_time: Some(*start),
                    end_time: Some(start + 3600),
                }),
                start_time: None,
            })
            .collect())
    }

    async fn create_event(
        &self,
        _access_token: &str,
        calendar_id: &str,
        event: &NewEvent,
    ) -> Result<ProviderResponse, ProviderError> {
        self.record_call()?;
        self.created
            .lock()
            .unwrap()
            .push((calendar_id.to_string(), event.clone()));
        Ok(ProviderResponse {
            status: self.create_status,
            body: self.create_body.clone(),
        })
    }
}
