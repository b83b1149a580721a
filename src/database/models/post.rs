use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::time_window::recent_window;
use crate::utils::logging::log_database_operation;

/// A channel post mirrored from the tracked channel.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Post {
    #[sqlx(rename = "post_id")]
    pub id: i64,
    /// Unix seconds, UTC.
    pub timestamp: i64,
}

impl Post {
    /// Stores a post unless one with the same id already exists.
    ///
    /// Returns `true` when a new row was written. Repeated ids keep the
    /// timestamp from the first call.
    pub async fn save(
        pool: &sqlx::SqlitePool,
        id: i64,
        timestamp: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO posts (post_id, timestamp) VALUES (?, ?)"
        )
        .bind(id)
        .bind(timestamp)
        .execute(pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        log_database_operation(
            "INSERT",
            "posts",
            Some(&format!("post {id} at {timestamp} inserted={inserted}")),
        );
        Ok(inserted)
    }

    /// The most recent post, if any.
    pub async fn latest(
        pool: &sqlx::SqlitePool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT post_id, timestamp FROM posts ORDER BY timestamp DESC LIMIT 1"
        )
        .fetch_optional(pool)
        .await
    }

    /// Posts with `lower <= timestamp < upper`, newest first.
    pub async fn in_range(
        pool: &sqlx::SqlitePool,
        lower: i64,
        upper: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT post_id, timestamp FROM posts
             WHERE timestamp >= ? AND timestamp < ?
             ORDER BY timestamp DESC"
        )
        .bind(lower)
        .bind(upper)
        .fetch_all(pool)
        .await
    }

    /// Today's posts: the 24 hours ending at the next local midnight.
    pub async fn recent(
        pool: &sqlx::SqlitePool,
        now: DateTime<Utc>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let (lower, upper) = recent_window(now);
        Self::in_range(pool, lower.timestamp(), upper.timestamp()).await
    }

    /// Deletes every post strictly older than `cutoff` and returns how many
    /// rows went away.
    pub async fn purge_before(
        pool: &sqlx::SqlitePool,
        cutoff: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE timestamp < ?")
            .bind(cutoff)
            .execute(pool)
            .await?;

        let deleted = result.rows_affected();
        log_database_operation(
            "DELETE",
            "posts",
            Some(&format!("{deleted} rows with timestamp < {cutoff}")),
        );
        Ok(deleted)
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }

    /// Publication time as a UTC instant.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        crate::services::time_window::from_unix(self.timestamp)
    }
}
