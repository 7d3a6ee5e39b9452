use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};

/// `302 Found` redirect, axum's `Redirect` has no 302 constructor
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
