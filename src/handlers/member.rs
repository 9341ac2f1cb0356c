//! Member administration handlers (admin role enforced by the route
//! group's role gate)

use crate::{
    error::AppError,
    middleware::AppState,
    models::member::{CreateMemberRequest, UpdateMemberRequest},
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListMembersQuery {
    pub search: Option<String>,
}

/// List members with optional search
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListMembersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let members = state
        .member_service
        .list(query.search.as_deref())
        .await?;
    let count = members.len();

    Ok(Json(json!({
        "members": members,
        "count": count
    })))
}

/// Enroll a new member
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.member_service.create(req).await?;

    Ok(Json(json!({
        "message": "Member created",
        "member": member
    })))
}

/// Update an existing member
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.member_service.update(id, req).await?;

    Ok(Json(json!({
        "message": "Member updated",
        "member": member
    })))
}

/// Remove a member
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.member_service.delete(id).await?;

    Ok(Json(json!({
        "message": "Member deleted"
    })))
}
