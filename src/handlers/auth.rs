//! Login handlers

use crate::{error::AppError, middleware::AppState, models::auth::*};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// Member login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MemberLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login_member(req).await?;
    Ok(Json(response))
}

/// Administrator login
pub async fn login_admin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login_admin(req).await?;
    Ok(Json(response))
}
