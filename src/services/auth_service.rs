//! Authentication service: credential verification and token issuance

use crate::{
    auth::{jwt::JwtService, password::PasswordHasher},
    config::AppConfig,
    error::AppError,
    models::{
        admin::{AdminProfile, Administrator},
        auth::*,
        member::{normalize_national_id, Member, MemberProfile},
    },
    repository::{AdminRepository, MemberRepository},
};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(
        db: PgPool,
        jwt_service: Arc<JwtService>,
        config: &AppConfig,
    ) -> Result<Self, AppError> {
        Ok(Self {
            db,
            jwt_service,
            hasher: PasswordHasher::from_config(&config.security)?,
        })
    }

    /// Member login: password verification followed by token minting.
    /// An unknown identity number and a wrong password produce the
    /// same external error so account existence never leaks.
    pub async fn login_member(
        &self,
        req: MemberLoginRequest,
    ) -> Result<MemberLoginResponse, AppError> {
        req.validate()?;
        let national_id = normalize_national_id(&req.national_id)?;

        let repo = MemberRepository::new(self.db.clone());
        let member: Member = repo
            .find_by_national_id(&national_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        self.check_stored_hash(&member.password_hash, "member", &member.id.to_string())?;

        if !self.hasher.verify(&req.password, &member.password_hash) {
            tracing::debug!(member_id = %member.id, "Member password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt_service.issue(&member.id, Role::Member)?;

        tracing::info!(member_id = %member.id, "Member logged in");

        Ok(MemberLoginResponse {
            token,
            member: MemberProfile::from(member),
        })
    }

    /// Administrator login by login name
    pub async fn login_admin(&self, req: AdminLoginRequest) -> Result<AdminLoginResponse, AppError> {
        req.validate()?;

        let repo = AdminRepository::new(self.db.clone());
        let admin: Administrator = repo
            .find_by_username(&req.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        self.check_stored_hash(&admin.password_hash, "administrator", &admin.id.to_string())?;

        if !self.hasher.verify(&req.password, &admin.password_hash) {
            tracing::debug!(admin_id = %admin.id, "Administrator password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt_service.issue(&admin.id, Role::Admin)?;

        tracing::info!(admin_id = %admin.id, "Administrator logged in");

        Ok(AdminLoginResponse {
            token,
            admin: AdminProfile::from(admin),
        })
    }

    /// An existing account with no stored hash is a provisioning bug,
    /// not a login failure; it must never be reported as bad
    /// credentials.
    fn check_stored_hash(&self, hash: &str, kind: &str, id: &str) -> Result<(), AppError> {
        if hash.is_empty() {
            return Err(AppError::ConfigurationFault(format!(
                "{} {} has no password hash",
                kind, id
            )));
        }
        Ok(())
    }
}
