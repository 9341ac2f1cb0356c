//! Route registration
//! Every protected group is layered with the token verifier and, where
//! a specific role is required, the role gate. Handlers never carry
//! their own ad hoc checks.

use axum::{
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{
    auth::{jwt_auth_middleware, role_gate},
    handlers,
    middleware::AppState,
    models::auth::Role,
};

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let jwt_service = state.jwt_service.clone();

    // Public endpoints (health probes)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // Login endpoints (no credential required)
    let login_routes = Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route("/api/login-admin", post(handlers::auth::login_admin));

    // Member-only: the member's own card
    let member_routes = Router::new()
        .route("/api/carnet", get(handlers::card::get_card))
        .layer(from_fn(|req, next| role_gate(Role::Member, req, next)))
        .layer(from_fn_with_state(jwt_service.clone(), jwt_auth_middleware));

    // Any authenticated principal: verification by card number
    let verification_routes = Router::new()
        .route("/api/verificar", post(handlers::card::verify_card))
        .layer(from_fn_with_state(jwt_service.clone(), jwt_auth_middleware));

    // Admin-only: member administration
    let admin_routes = Router::new()
        .route(
            "/api/admin/members",
            get(handlers::member::list_members).post(handlers::member::create_member),
        )
        .route(
            "/api/admin/members/{id}",
            put(handlers::member::update_member).delete(handlers::member::delete_member),
        )
        .layer(from_fn(|req, next| role_gate(Role::Admin, req, next)))
        .layer(from_fn_with_state(jwt_service.clone(), jwt_auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(login_routes)
        .merge(member_routes)
        .merge(verification_routes)
        .merge(admin_routes)
        .layer(cors_layer(&state.config.server.cors_origin))
        .layer(from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}

/// CORS for the frontend origin configured in `server.cors_origin`
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value).allow_credentials(true),
        Err(_) => {
            tracing::warn!(origin = %origin, "Invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}
