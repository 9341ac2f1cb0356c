//! Member administration service: create, update, delete, list

use crate::{
    auth::password::PasswordHasher,
    config::AppConfig,
    error::AppError,
    models::member::*,
    repository::MemberRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct MemberService {
    db: PgPool,
    config: Arc<AppConfig>,
    hasher: PasswordHasher,
}

impl MemberService {
    pub fn new(db: PgPool, config: Arc<AppConfig>) -> Result<Self, AppError> {
        let hasher = PasswordHasher::from_config(&config.security)?;
        Ok(Self { db, config, hasher })
    }

    /// List members, optionally filtered, each with derived validity
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<MemberSummary>, AppError> {
        let repo = MemberRepository::new(self.db.clone());
        let members = repo.list(search).await?;

        Ok(members.into_iter().map(MemberSummary::from).collect())
    }

    /// Enroll a new member
    pub async fn create(&self, req: CreateMemberRequest) -> Result<MemberProfile, AppError> {
        req.validate()?;

        let national_id = normalize_national_id(&req.national_id)?;
        self.check_password_policy(&req.password)?;
        let category = parse_category(req.category.as_deref())?;

        let repo = MemberRepository::new(self.db.clone());

        // Uniqueness checks before the insert so the caller gets a
        // specific conflict message instead of a bare constraint error
        if repo.find_by_national_id(&national_id).await?.is_some() {
            return Err(AppError::conflict(
                "A member with that national identity number already exists",
            ));
        }
        if repo.find_by_number(req.member_number.trim()).await?.is_some() {
            return Err(AppError::conflict(
                "A member with that member number already exists",
            ));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let photo_url = match req.photo_url.as_deref().filter(|s| !s.is_empty()) {
            Some(url) => url.to_string(),
            None => default_photo_url(&req.first_name, &req.last_name),
        };

        let member = repo
            .create(&req, &national_id, &password_hash, category.as_str(), &photo_url)
            .await?;

        tracing::info!(member_id = %member.id, member_number = %member.member_number, "Member created");

        Ok(MemberProfile::from(member))
    }

    /// Update an existing member; password change only when requested
    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateMemberRequest,
    ) -> Result<MemberProfile, AppError> {
        req.validate()?;
        let category = parse_category(req.category.as_deref())?;

        let password_hash = match req.password.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(password) => {
                self.check_password_policy(password)?;
                Some(self.hasher.hash(password)?)
            }
            None => None,
        };

        let repo = MemberRepository::new(self.db.clone());
        let member = repo
            .update(id, &req, category.as_str(), password_hash.as_deref())
            .await?
            .ok_or_else(|| AppError::not_found("member"))?;

        tracing::info!(member_id = %member.id, "Member updated");

        Ok(MemberProfile::from(member))
    }

    /// Remove a member
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = MemberRepository::new(self.db.clone());

        if !repo.delete(id).await? {
            return Err(AppError::not_found("member"));
        }

        tracing::info!(member_id = %id, "Member deleted");

        Ok(())
    }

    fn check_password_policy(&self, password: &str) -> Result<(), AppError> {
        let min = self.config.security.password_min_length;
        if password.len() < min {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                min
            )));
        }
        Ok(())
    }
}

fn parse_category(raw: Option<&str>) -> Result<MemberCategory, AppError> {
    match raw.filter(|s| !s.is_empty()) {
        Some(s) => MemberCategory::parse(s)
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", s))),
        None => Ok(MemberCategory::DEFAULT),
    }
}

/// Generated avatar for members enrolled without a photo
fn default_photo_url(first_name: &str, last_name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}+{}&size=200&background=2c5282&color=fff",
        urlencoding::encode(first_name),
        urlencoding::encode(last_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_defaults_to_titular() {
        assert_eq!(parse_category(None).unwrap(), MemberCategory::Titular);
        assert_eq!(parse_category(Some("")).unwrap(), MemberCategory::Titular);
    }

    #[test]
    fn test_parse_category_rejects_unknown() {
        assert!(parse_category(Some("Gold")).is_err());
    }

    #[test]
    fn test_default_photo_url_encodes_names() {
        let url = default_photo_url("María José", "Pérez");
        assert!(url.starts_with("https://ui-avatars.com/api/?name="));
        assert!(!url.contains(' '));
    }
}
