//! Router for the calendars API

use std::sync::{Arc, RwLock};

use axum::{Extension, Router, extract::State, response::Json};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::scheduling::list_calendars;
use crate::session::SessionId;

type SharedState = Arc<RwLock<AppState>>;

async fn calendars_handler(
    State(state): State<SharedState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<Vec<public::CalendarSummary>>, ApiError> {
    let (provider, session) = {
        let state = state.read().unwrap();
        (Arc::clone(&state.provider), state.sessions.load(&session_id))
    };

    let calendars = list_calendars(provider.as_ref(), &session).await?;
    let resp = calendars.into_iter().map(Into::into).collect();

    Ok(Json(resp))
}

/// Create the calendars router
pub fn router() -> Router<SharedState> {
    Router::new().route("/calendars", axum::routing::get(calendars_handler))
}
