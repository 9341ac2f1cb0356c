//! Card view and verification handlers

use crate::{
    auth::middleware::AuthContext, error::AppError, middleware::AppState,
    models::auth::VerifyCardRequest,
};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// Card for the authenticated member (profile + derived validity)
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let card = state.card_service.my_card(auth_context.subject_id).await?;
    Ok(Json(card))
}

/// Verify a card by member number. Open to any authenticated
/// principal; an unknown number yields a success-status payload with
/// `valid: false`.
pub async fn verify_card(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    Json(req): Json<VerifyCardRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.card_service.verify(req).await?;
    Ok(Json(outcome))
}
