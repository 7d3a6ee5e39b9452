//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use tower::util::ServiceExt;

use scheduler::api::AppState;
use scheduler::api::app;
use scheduler::core::AppConfig;
use scheduler::provider::NylasClient;
use scheduler::scheduling::RecruiterCalendar;

pub const TEST_TOKEN: &str = "test_access_token";

/// Configuration pointing the provider client at `api_uri`, usually a
/// `mockito` server.
pub fn test_config(api_uri: &str) -> AppConfig {
    AppConfig {
        nylas_api_uri: api_uri.to_string(),
        nylas_api_key: String::from("test_api_key"),
        nylas_client_id: String::from("test_client_id"),
        nylas_client_secret: String::from("test_client_secret"),
        nylas_redirect_uri: String::from("http://localhost:5000/oauth/callback"),
        nylas_scope: None,
        recruiter_calendar: RecruiterCalendar::default(),
        strict_conflict_check: false,
        lookahead_days: 30,
        request_timeout_secs: 5,
        candidate_email: Some(String::from("candidate@example.com")),
        recruiter_email: None,
        interview_minutes: 60,
    }
}

pub fn test_app_with(config: AppConfig) -> Router {
    let provider = NylasClient::new(&config).expect("Failed to build provider client");
    let app_state = AppState::new(config, Arc::new(provider));
    app(Arc::new(RwLock::new(app_state)))
}

pub fn test_app(api_uri: &str) -> Router {
    test_app_with(test_config(api_uri))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not JSON")
}

/// The `name=value` pair of the session cookie set on `response`
pub fn session_cookie(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get("set-cookie")
        .expect("No session cookie set")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

/// GET `uri`, optionally as the session in `cookie`
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a urlencoded form to `uri`
pub async fn post_form(app: &Router, uri: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(form.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn mock_token_exchange(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/v3/connect/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "access_token": TEST_TOKEN,
                "email": "recruiter@example.com",
                "grant_id": "grant_123",
                "expires_in": 3600,
                "token_type": "Bearer"
            })
            .to_string(),
        )
        .create_async()
        .await
}

pub async fn mock_calendars(
    server: &mut mockito::ServerGuard,
    calendars: serde_json::Value,
) -> mockito::Mock {
    server
        .mock("GET", "/v3/grants/me/calendars")
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "request_id": "req_1", "data": calendars }).to_string())
        .create_async()
        .await
}

pub async fn mock_events(
    server: &mut mockito::ServerGuard,
    calendar_id: &str,
    start_times: &[i64],
) -> mockito::Mock {
    let events: Vec<serde_json::Value> = start_times
        .iter()
        .map(|start| {
            serde_json::json!({
                "id": format!("evt_{}", start),
                "title": "Busy",
                "when": { "start_time": start, "end_time": start + 1800 }
            })
        })
        .collect();
    server
        .mock("GET", "/v3/grants/me/events")
        .match_query(mockito::Matcher::UrlEncoded(
            "calendar_id".into(),
            calendar_id.into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "data": events }).to_string())
        .create_async()
        .await
}

pub fn two_calendars() -> serde_json::Value {
    serde_json::json!([
        { "id": "cal_personal", "name": "Personal", "read_only": false },
        { "id": "cal_recruiting", "name": "Recruiting", "read_only": false }
    ])
}

/// Complete the OAuth callback and return the session cookie
pub async fn sign_in(app: &Router) -> String {
    let response = get(app, "/oauth/callback?code=valid_code", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response)
}
