//! Router for the candidate's slot proposal

use std::sync::{Arc, RwLock};

use axum::{
    Extension, Form, Router,
    extract::State,
    response::{Html, Response},
};
use serde_json::json;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::api::templates::Page;
use crate::api::utils::found;
use crate::session::SessionId;

type SharedState = Arc<RwLock<AppState>>;

async fn candidate_form(
    State(state): State<SharedState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Html<String>, ApiError> {
    let state = state.read().unwrap();
    let session = state.sessions.load(&session_id);
    let html = state.templates.render(
        &Page::CandidateForm.to_string(),
        &json!({
            "candidate_time": session.candidate_time().unwrap_or_default(),
            "candidate_email": session.candidate_email().unwrap_or_default(),
        }),
    )?;
    Ok(Html(html))
}

async fn propose_slot(
    State(state): State<SharedState>,
    Extension(session_id): Extension<SessionId>,
    Form(form): Form<public::CandidateForm>,
) -> Response {
    let time = form.time.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    let email = form.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());
    tracing::info!("Candidate proposed {:?}", time);

    state.write().unwrap().sessions.update(&session_id, |session| {
        session.candidate_time = time;
        if email.is_some() {
            session.candidate_email = email;
        }
    });

    found("/recruiter-availability")
}

/// Create the candidate router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/candidate-availability",
        axum::routing::get(candidate_form).post(propose_slot),
    )
}
