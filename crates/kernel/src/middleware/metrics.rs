//! Request metrics middleware.

use std::time::Instant;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::error::ErrorCode;
use crate::metrics::UNMATCHED_PATH;
use crate::state::AppState;

/// Record method, path, status, and duration of every request, plus the
/// error code of error responses.
pub async fn track_metrics(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let code = response.extensions().get::<ErrorCode>().copied();
    let path = match code {
        Some(ErrorCode("no_route")) => UNMATCHED_PATH,
        _ => path.as_str(),
    };

    state.metrics().record_request(
        &method,
        path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    if let Some(ErrorCode(code)) = code {
        state.metrics().record_miss(code);
    }

    response
}
