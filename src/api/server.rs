use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use axum::middleware;
use axum::{
    Router,
    extract::Request,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::provider::NylasClient;
use crate::session::{SESSION_COOKIE, SessionId};

/// Attach a `SessionId` to every request, issuing a new cookie when
/// the browser did not send a valid one.
async fn attach_session(jar: CookieJar, mut request: Request, next: middleware::Next) -> Response {
    let existing = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| uuid::Uuid::parse_str(cookie.value()).ok())
        .map(|id| SessionId(id.to_string()));
    let is_new = existing.is_none();
    let session_id = existing.unwrap_or_else(SessionId::generate);

    request.extensions_mut().insert(session_id.clone());
    let response = next.run(request).await;

    if !is_new {
        return response;
    }
    let cookie = Cookie::build((SESSION_COOKIE, session_id.0))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), response).into_response()
}

pub fn app(shared_state: Arc<RwLock<AppState>>) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(middleware::from_fn(attach_session))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.nylas_client_id.is_empty() {
        tracing::warn!("NYLAS_CLIENT_ID is not set, the provider will reject the consent URL");
    }

    let provider = NylasClient::new(&config).context("Failed to build provider client")?;
    let app_state = AppState::new(config, Arc::new(provider));
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    tracing::debug!("Server started. Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
