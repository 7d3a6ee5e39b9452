//! API routes module

pub mod auth;
mod availability;
pub mod calendars;
pub mod candidate;
mod interview;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

pub const BANNER: &str = "Interview scheduler - Go to /auth-start to start.";

async fn index() -> &'static str {
    BANNER
}

/// Create the combined router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(index))
        // OAuth consent and callback
        .merge(auth::router())
        // Calendar listing
        .merge(calendars::router())
        // Candidate proposes a slot
        .merge(candidate::router())
        // Recruiter availability check
        .merge(availability::router())
        // Booking
        .merge(interview::router())
}
