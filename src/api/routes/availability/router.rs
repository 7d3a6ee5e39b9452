//! Router for the recruiter availability check

use std::sync::{Arc, RwLock};

use axum::{Extension, Router, extract::State, response::Json};

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::scheduling::check_recruiter_availability;
use crate::session::SessionId;

type SharedState = Arc<RwLock<AppState>>;

async fn recruiter_availability(
    State(state): State<SharedState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<Vec<String>>, ApiError> {
    let (provider, options, mut session) = {
        let state = state.read().unwrap();
        (
            Arc::clone(&state.provider),
            state.config.availability_options(),
            state.sessions.load(&session_id),
        )
    };

    let result = check_recruiter_availability(
        provider.as_ref(),
        &mut session,
        &options,
        chrono::Utc::now(),
    )
    .await;

    // The selected calendar is kept even when no slot is free
    if let Some(calendar_id) = session.calendar_id {
        state.write().unwrap().sessions.update(&session_id, |s| {
            s.calendar_id = Some(calendar_id);
        });
    }

    Ok(Json(result?))
}

/// Create the availability router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/recruiter-availability",
        axum::routing::get(recruiter_availability),
    )
}
