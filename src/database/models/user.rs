use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::logging::log_database_operation;

/// Someone who has talked to the bot at least once.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    #[sqlx(rename = "user_id")]
    pub id: i64,
    pub first_name: Option<String>,
    pub username: Option<String>,
    pub joined_at: i64,
}

impl User {
    /// Records a user on first contact. Later calls never overwrite the
    /// stored name or handle.
    pub async fn register(
        pool: &sqlx::SqlitePool,
        id: i64,
        first_name: &str,
        username: &str,
    ) -> Result<bool, sqlx::Error> {
        let joined_at = Utc::now().timestamp();

        let result = sqlx::query(
            "INSERT OR IGNORE INTO users (user_id, first_name, username, joined_at) VALUES (?, ?, ?, ?)"
        )
        .bind(id)
        .bind(first_name)
        .bind(username)
        .bind(joined_at)
        .execute(pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            log_database_operation("INSERT", "users", Some(&format!("new user {id}")));
        }
        Ok(inserted)
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT user_id, first_name, username, joined_at FROM users WHERE user_id = ?"
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// All-time number of registered users.
    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
