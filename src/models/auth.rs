//! Authentication-related models

use super::{admin::AdminProfile, member::MemberProfile, member::PublicMemberProfile};
use serde::{Deserialize, Serialize};

/// Principal role. The two principal kinds share one capability set
/// discriminated by this tag; downstream code switches on it, never on
/// type identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

/// Member login request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct MemberLoginRequest {
    #[validate(length(min = 1, message = "national_id is required"))]
    pub national_id: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Administrator login request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Member login response
#[derive(Debug, Serialize)]
pub struct MemberLoginResponse {
    pub token: String,
    pub member: MemberProfile,
}

/// Administrator login response
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

/// Card verification request (third-party lookup by number)
#[derive(Debug, Deserialize, validator::Validate)]
pub struct VerifyCardRequest {
    #[validate(length(min = 1, message = "member_number is required"))]
    pub member_number: String,
}

/// Card verification outcome. An unknown number is an expected
/// outcome of the workflow, never an error.
#[derive(Debug, Serialize)]
pub struct VerifyCardResponse {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<PublicMemberProfile>,
}
