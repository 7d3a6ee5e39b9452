//! Router for booking the interview

use std::sync::{Arc, RwLock};

use axum::{Extension, Router, extract::State, response::Json};

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::scheduling::{BookingConfirmation, schedule_interview};
use crate::session::SessionId;

type SharedState = Arc<RwLock<AppState>>;

async fn schedule_handler(
    State(state): State<SharedState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<BookingConfirmation>, ApiError> {
    let (provider, template, session) = {
        let state = state.read().unwrap();
        (
            Arc::clone(&state.provider),
            state.config.interview_template(),
            state.sessions.load(&session_id),
        )
    };

    let confirmation = schedule_interview(provider.as_ref(), &session, &template).await?;

    Ok(Json(confirmation))
}

/// Create the interview router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/schedule-interview",
        axum::routing::get(schedule_handler),
    )
}
