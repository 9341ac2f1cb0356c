//! Card service: self-service card view and third-party verification

use crate::{
    error::AppError,
    membership,
    models::{
        auth::{VerifyCardRequest, VerifyCardResponse},
        member::{CardResponse, MemberProfile, PublicMemberProfile},
    },
    repository::MemberRepository,
};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct CardService {
    db: PgPool,
}

impl CardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Card view for the authenticated member: full profile plus the
    /// validity flag computed against today.
    pub async fn my_card(&self, member_id: Uuid) -> Result<CardResponse, AppError> {
        let repo = MemberRepository::new(self.db.clone());
        let member = repo
            .find_by_id(&member_id)
            .await?
            .ok_or_else(|| AppError::not_found("member"))?;

        let is_current = membership::is_current_now(member.expires_on);

        Ok(CardResponse {
            profile: MemberProfile::from(member),
            is_current,
        })
    }

    /// Third-party verification by card number. Returns a coarse
    /// outcome; an unknown number is a normal result, not an error.
    /// Only the non-sensitive public subset is echoed back.
    pub async fn verify(&self, req: VerifyCardRequest) -> Result<VerifyCardResponse, AppError> {
        req.validate()?;

        let repo = MemberRepository::new(self.db.clone());
        let member = match repo.find_by_number(req.member_number.trim()).await? {
            Some(m) => m,
            None => {
                return Ok(VerifyCardResponse {
                    valid: false,
                    message: "Member number not found".to_string(),
                    member: None,
                })
            }
        };

        let valid = membership::is_current_now(member.expires_on);
        let message = if valid {
            "Membership current"
        } else {
            "Membership expired"
        };

        Ok(VerifyCardResponse {
            valid,
            message: message.to_string(),
            member: Some(PublicMemberProfile::from(&member)),
        })
    }
}
