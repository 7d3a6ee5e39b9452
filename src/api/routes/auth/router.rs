//! Router for the OAuth flow

use std::sync::{Arc, RwLock};

use axum::{
    Extension, Router,
    extract::State,
    response::{Html, Response},
};
use axum_extra::extract::Query;
use serde_json::json;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::api::templates::Page;
use crate::api::utils::found;
use crate::scheduling::complete_auth;
use crate::session::SessionId;

type SharedState = Arc<RwLock<AppState>>;

/// Send the user to the provider's consent page
async fn begin_auth(State(state): State<SharedState>) -> Response {
    let url = state.read().unwrap().provider.authorization_url();
    tracing::debug!("Redirecting to consent page {}", url);
    found(&url)
}

async fn oauth_callback(
    State(state): State<SharedState>,
    Extension(session_id): Extension<SessionId>,
    Query(params): Query<public::CallbackQuery>,
) -> Result<Html<String>, ApiError> {
    let (provider, mut session) = {
        let state = state.read().unwrap();
        (Arc::clone(&state.provider), state.sessions.load(&session_id))
    };

    let grant = complete_auth(provider.as_ref(), &mut session, params.code.as_deref()).await?;

    let mut state = state.write().unwrap();
    state.sessions.save(&session_id, session);
    let html = state.templates.render(
        &Page::AuthSuccess.to_string(),
        &json!({
            "email": grant.email,
            "access_token": grant.access_token,
        }),
    )?;

    Ok(Html(html))
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/auth-start", axum::routing::get(begin_auth))
        .route("/nylas/auth", axum::routing::get(begin_auth))
        .route("/oauth/callback", axum::routing::get(oauth_callback))
}
