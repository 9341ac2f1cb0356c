//! Administrator domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrator account as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Administrator {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Administrator profile (no password hash)
#[derive(Debug, Serialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub username: String,
}

impl From<Administrator> for AdminProfile {
    fn from(admin: Administrator) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
        }
    }
}
