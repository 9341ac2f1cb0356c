//! Administrator repository

use crate::{error::AppError, models::admin::Administrator};
use sqlx::PgPool;

pub struct AdminRepository {
    db: PgPool,
}

impl AdminRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Find an administrator by login name
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Administrator>, AppError> {
        let admin =
            sqlx::query_as::<_, Administrator>("SELECT * FROM administrators WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.db)
                .await?;

        Ok(admin)
    }
}
