//! Token verification middleware and role gate tests, exercised
//! through a minimal router the same way the real route groups are
//! wired.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use carnet_service::auth::{jwt::JwtService, jwt_auth_middleware, role_gate};
use carnet_service::models::auth::Role;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const TEST_SECRET: &str = "test_secret_key_32_characters_long!";

async fn ok_handler() -> &'static str {
    "ok"
}

fn protected_router(jwt_service: Arc<JwtService>) -> Router {
    let member_routes = Router::new()
        .route("/carnet", get(ok_handler))
        .layer(from_fn(|req, next| role_gate(Role::Member, req, next)))
        .layer(from_fn_with_state(jwt_service.clone(), jwt_auth_middleware));

    let admin_routes = Router::new()
        .route("/admin", get(ok_handler))
        .layer(from_fn(|req, next| role_gate(Role::Admin, req, next)))
        .layer(from_fn_with_state(jwt_service.clone(), jwt_auth_middleware));

    let any_authenticated = Router::new()
        .route("/verify", get(ok_handler))
        .layer(from_fn_with_state(jwt_service, jwt_auth_middleware));

    Router::new()
        .merge(member_routes)
        .merge(admin_routes)
        .merge(any_authenticated)
}

async fn status_for(router: Router, uri: &str, token: Option<&str>) -> StatusCode {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let router = protected_router(jwt);

    assert_eq!(
        status_for(router, "/carnet", None).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let router = protected_router(jwt);

    assert_eq!(
        status_for(router, "/carnet", Some("not-a-token")).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_member_token_reaches_member_route() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let token = jwt.issue(&Uuid::new_v4(), Role::Member).unwrap();
    let router = protected_router(jwt);

    assert_eq!(
        status_for(router, "/carnet", Some(&token)).await,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_member_token_denied_on_admin_route() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let token = jwt.issue(&Uuid::new_v4(), Role::Member).unwrap();
    let router = protected_router(jwt);

    assert_eq!(
        status_for(router, "/admin", Some(&token)).await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_admin_token_denied_on_member_route() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let token = jwt.issue(&Uuid::new_v4(), Role::Admin).unwrap();
    let router = protected_router(jwt);

    assert_eq!(
        status_for(router, "/carnet", Some(&token)).await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_both_roles_pass_the_any_authenticated_route() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let member = jwt.issue(&Uuid::new_v4(), Role::Member).unwrap();
    let admin = jwt.issue(&Uuid::new_v4(), Role::Admin).unwrap();

    assert_eq!(
        status_for(protected_router(jwt.clone()), "/verify", Some(&member)).await,
        StatusCode::OK
    );
    assert_eq!(
        status_for(protected_router(jwt), "/verify", Some(&admin)).await,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_token_signed_elsewhere_is_unauthorized() {
    let jwt = Arc::new(JwtService::from_secret(TEST_SECRET));
    let foreign = JwtService::from_secret("a_completely_different_32_char_key!!");
    let token = foreign.issue(&Uuid::new_v4(), Role::Admin).unwrap();
    let router = protected_router(jwt);

    assert_eq!(
        status_for(router, "/admin", Some(&token)).await,
        StatusCode::UNAUTHORIZED
    );
}
