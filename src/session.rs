//! Per-browser session state, keyed by the id in the session cookie

use std::collections::HashMap;

pub const SESSION_COOKIE: &str = "scheduler_session";

/// Session id attached to each request by the session middleware
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub email: Option<String>,
    pub grant_id: Option<String>,
    pub candidate_time: Option<String>,
    pub candidate_email: Option<String>,
    pub calendar_id: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Session {
    pub fn access_token(&self) -> Option<&str> {
        non_empty(&self.access_token)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn grant_id(&self) -> Option<&str> {
        non_empty(&self.grant_id)
    }

    pub fn candidate_time(&self) -> Option<&str> {
        non_empty(&self.candidate_time)
    }

    pub fn candidate_email(&self) -> Option<&str> {
        non_empty(&self.candidate_email)
    }

    pub fn calendar_id(&self) -> Option<&str> {
        non_empty(&self.calendar_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

/// In-memory session storage. Entries live until the process exits.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, Session>,
}

impl SessionStore {
    /// Snapshot of the session, empty if it was never written
    pub fn load(&self, id: &SessionId) -> Session {
        self.sessions.get(id).cloned().unwrap_or_default()
    }

    pub fn save(&mut self, id: &SessionId, session: Session) {
        self.sessions.insert(id.clone(), session);
    }

    pub fn update<F>(&mut self, id: &SessionId, f: F)
    where
        F: FnOnce(&mut Session),
    {
        f(self.sessions.entry(id.clone()).or_default());
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
