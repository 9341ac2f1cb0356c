//! Application state and HTTP middleware

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Shared application state. Services are wrapped in Arc so cloning
/// the state per request stays a pointer copy.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::AppConfig,
    pub db: sqlx::PgPool,
    pub jwt_service: Arc<crate::auth::jwt::JwtService>,
    pub auth_service: Arc<crate::services::AuthService>,
    pub card_service: Arc<crate::services::CardService>,
    pub member_service: Arc<crate::services::MemberService>,
}

/// Request tracking middleware: a span per request with trace and
/// request ids, plus a completion log line.
pub async fn request_tracking_middleware(req: Request, next: Next) -> Response {
    let trace_id = extract_or_generate_trace_id(req.headers());
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let uri = req.uri().to_string();

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    async move {
        let start = Instant::now();

        let response = next.run(req).await;

        let elapsed = start.elapsed();

        tracing::info!(
            method = %method,
            uri = %uri,
            status = response.status().as_u16(),
            elapsed_ms = elapsed.as_millis(),
            "Request completed"
        );

        let mut response = response;
        if let Ok(value) = trace_id.parse() {
            response.headers_mut().insert("x-trace-id", value);
        }
        if let Ok(value) = request_id.parse() {
            response.headers_mut().insert("x-request-id", value);
        }

        response
    }
    .instrument(span)
    .await
}

/// Propagate an inbound trace id or mint a fresh one
fn extract_or_generate_trace_id(headers: &HeaderMap) -> String {
    headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
