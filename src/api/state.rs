use std::sync::Arc;

use handlebars::Handlebars;

use crate::api::templates::templates;
use crate::core::AppConfig;
use crate::provider::CalendarProvider;
use crate::session::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub provider: Arc<dyn CalendarProvider>,
    // Keyed by the session cookie, see `server::attach_session`
    pub sessions: SessionStore,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Arc<dyn CalendarProvider>) -> Self {
        Self {
            config,
            provider,
            sessions: SessionStore::default(),
            templates: templates(),
        }
    }
}
