//! Member domain models

use crate::{error::AppError, membership};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Member record as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: Uuid,
    /// National identity number, digits only, at least 7 digits
    pub national_id: String,
    pub password_hash: String,

    pub first_name: String,
    pub last_name: String,
    /// Externally visible card number, unique across members
    pub member_number: String,
    pub category: String,
    /// Membership expiration date (inclusive)
    pub expires_on: NaiveDate,
    pub photo_url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Membership category (small fixed set)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MemberCategory {
    Titular,
    Adherente,
    Vitalicio,
}

impl MemberCategory {
    pub const DEFAULT: MemberCategory = MemberCategory::Titular;

    /// Strict parse, for validating inbound requests
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Titular" => Some(MemberCategory::Titular),
            "Adherente" => Some(MemberCategory::Adherente),
            "Vitalicio" => Some(MemberCategory::Vitalicio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberCategory::Titular => "Titular",
            MemberCategory::Adherente => "Adherente",
            MemberCategory::Vitalicio => "Vitalicio",
        }
    }
}

impl From<MemberCategory> for String {
    fn from(category: MemberCategory) -> Self {
        category.as_str().to_string()
    }
}

/// Normalize a national identity number: strip every non-digit, then
/// require at least 7 digits.
pub fn normalize_national_id(raw: &str) -> Result<String, AppError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 7 {
        return Err(AppError::validation(
            "National identity number must have at least 7 digits",
        ));
    }

    Ok(digits)
}

/// Create member request (admin only)
#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, message = "national_id is required"))]
    pub national_id: String,
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "member_number is required"))]
    pub member_number: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub expires_on: NaiveDate,
    pub category: Option<String>,
    pub photo_url: Option<String>,
}

/// Update member request (admin only); password change is optional
#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    pub expires_on: NaiveDate,
    pub category: Option<String>,
    pub password: Option<String>,
}

/// Member profile returned to the member themself (no password hash)
#[derive(Debug, Serialize)]
pub struct MemberProfile {
    pub id: Uuid,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub member_number: String,
    pub category: String,
    pub expires_on: NaiveDate,
    pub photo_url: String,
}

impl From<Member> for MemberProfile {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            national_id: member.national_id,
            first_name: member.first_name,
            last_name: member.last_name,
            member_number: member.member_number,
            category: member.category,
            expires_on: member.expires_on,
            photo_url: member.photo_url,
        }
    }
}

/// Self-service card view: profile plus derived validity
#[derive(Debug, Serialize)]
pub struct CardResponse {
    #[serde(flatten)]
    pub profile: MemberProfile,
    pub is_current: bool,
}

/// Non-sensitive subset used in the third-party verification path.
/// Never echoes the national identity number or photo.
#[derive(Debug, Serialize)]
pub struct PublicMemberProfile {
    pub first_name: String,
    pub last_name: String,
    pub member_number: String,
    pub category: String,
    pub expires_on: NaiveDate,
}

impl From<&Member> for PublicMemberProfile {
    fn from(member: &Member) -> Self {
        Self {
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            member_number: member.member_number.clone(),
            category: member.category.clone(),
            expires_on: member.expires_on,
        }
    }
}

/// Admin list row: profile plus derived validity
#[derive(Debug, Serialize)]
pub struct MemberSummary {
    #[serde(flatten)]
    pub profile: MemberProfile,
    pub is_current: bool,
}

impl From<Member> for MemberSummary {
    fn from(member: Member) -> Self {
        let is_current = membership::is_current_now(member.expires_on);
        Self {
            profile: MemberProfile::from(member),
            is_current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_national_id_strips_non_digits() {
        assert_eq!(normalize_national_id("12.345.678").unwrap(), "12345678");
        assert_eq!(normalize_national_id(" 1234567 ").unwrap(), "1234567");
    }

    #[test]
    fn test_normalize_national_id_too_short() {
        assert!(normalize_national_id("123456").is_err());
        assert!(normalize_national_id("12-34-56").is_err());
        assert!(normalize_national_id("").is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(MemberCategory::parse("Titular"), Some(MemberCategory::Titular));
        assert_eq!(MemberCategory::parse("Vitalicio"), Some(MemberCategory::Vitalicio));
        assert_eq!(MemberCategory::parse("titular"), None);
        assert_eq!(MemberCategory::parse("Other"), None);
    }
}
