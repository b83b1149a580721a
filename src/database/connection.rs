use anyhow::Result;
use sqlx::{SqlitePool, migrate::MigrateDatabase, Sqlite};
use std::path::Path;
use tracing::info;

/// Schema of the posts database.
pub const POSTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    post_id INTEGER PRIMARY KEY,
    timestamp INTEGER NOT NULL
)
"#;

/// Schema of the users database.
pub const USERS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY,
    first_name TEXT,
    username TEXT,
    joined_at INTEGER NOT NULL
)
"#;

#[derive(Clone)]
pub struct DatabaseManager {
    pub pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_parent_dir(database_url)?;

        // Create database if it doesn't exist
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            info!("Creating database {}", database_url);
            Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePool::connect(database_url).await?;

        Ok(Self { pool })
    }

    /// Creates the single table this database holds, if missing.
    pub async fn ensure_schema(&self, schema: &str) -> Result<()> {
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }
}

fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = path.trim_start_matches("//");
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating directory {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// The two independent stores the bot persists to.
#[derive(Clone)]
pub struct Stores {
    pub posts: DatabaseManager,
    pub users: DatabaseManager,
}

impl Stores {
    /// Opens both databases and makes sure their tables exist.
    pub async fn open(posts_url: &str, users_url: &str) -> Result<Self> {
        let posts = DatabaseManager::new(posts_url).await?;
        posts.ensure_schema(POSTS_SCHEMA).await?;
        info!("Posts database ready at {}", posts_url);

        let users = DatabaseManager::new(users_url).await?;
        users.ensure_schema(USERS_SCHEMA).await?;
        info!("Users database ready at {}", users_url);

        Ok(Self { posts, users })
    }
}
