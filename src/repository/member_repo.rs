//! Member repository
//! Absent rows come back as `None`; a store failure surfaces as a
//! database error, which the error layer turns into a 500.

use crate::{error::AppError, models::member::*};
use sqlx::PgPool;
use uuid::Uuid;

pub struct MemberRepository {
    db: PgPool,
}

impl MemberRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Find a member by normalized national identity number
    pub async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Member>, AppError> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE national_id = $1")
            .bind(national_id)
            .fetch_optional(&self.db)
            .await?;

        Ok(member)
    }

    /// Find a member by card number
    pub async fn find_by_number(&self, member_number: &str) -> Result<Option<Member>, AppError> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE member_number = $1")
            .bind(member_number)
            .fetch_optional(&self.db)
            .await?;

        Ok(member)
    }

    /// Find a member by ID
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Member>, AppError> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(member)
    }

    /// Create a member
    pub async fn create(
        &self,
        req: &CreateMemberRequest,
        national_id: &str,
        password_hash: &str,
        category: &str,
        photo_url: &str,
    ) -> Result<Member, AppError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (
                national_id, password_hash, first_name, last_name,
                member_number, category, expires_on, photo_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(national_id)
        .bind(password_hash)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.member_number)
        .bind(category)
        .bind(req.expires_on)
        .bind(photo_url)
        .fetch_one(&self.db)
        .await?;

        Ok(member)
    }

    /// Update a member; optionally replaces the password hash
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateMemberRequest,
        category: &str,
        password_hash: Option<&str>,
    ) -> Result<Option<Member>, AppError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET
                first_name = $2,
                last_name = $3,
                expires_on = $4,
                category = $5,
                password_hash = COALESCE($6, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.expires_on)
        .bind(category)
        .bind(password_hash)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    /// Delete a member
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List members, optionally filtered by a search term matched
    /// against identity number, names, card number and category
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Member>, AppError> {
        let members = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                sqlx::query_as::<_, Member>(
                    r#"
                    SELECT * FROM members
                    WHERE national_id ILIKE $1
                        OR first_name ILIKE $1
                        OR last_name ILIKE $1
                        OR member_number ILIKE $1
                        OR category ILIKE $1
                    ORDER BY last_name, first_name
                    "#,
                )
                .bind(format!("%{}%", term))
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Member>(
                    "SELECT * FROM members ORDER BY last_name, first_name",
                )
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(members)
    }
}
