use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::database::{connection::DatabaseManager, models::Post};
use crate::services::time_window::{local_midnight_after, today_cutoff};
use crate::utils::logging::{log_database_error, log_system_event};

/// Deletes yesterday's posts every night at local midnight.
pub struct CleanupService {
    db: DatabaseManager,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl CleanupService {
    pub fn new(db: DatabaseManager) -> Self {
        Self {
            db,
            cancel: CancellationToken::new(),
            handle: None,
        }
    }

    /// Spawns the nightly loop. Calling it twice keeps the first loop.
    pub fn start(&mut self) {
        if self.is_running() {
            tracing::warn!("Cleanup service already running");
            return;
        }

        let db = self.db.clone();
        let cancel = self.cancel.clone();
        self.handle = Some(tokio::spawn(run_cleanup_loop(db, cancel)));

        tracing::info!("Cleanup service started - purging old posts at local midnight");
    }

    /// Cancels the loop and waits for it to finish.
    pub async fn stop(&mut self) -> Result<(), tokio::task::JoinError> {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            handle.await?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    // Manual trigger for testing
    pub async fn purge_now(&self) -> Result<u64, sqlx::Error> {
        purge_old_posts(&self.db, Utc::now()).await
    }
}

async fn run_cleanup_loop(db: DatabaseManager, cancel: CancellationToken) {
    loop {
        let now = Utc::now();
        let deadline = local_midnight_after(now);
        let wait = sleep_duration_until(now, deadline);
        tracing::debug!("Next post cleanup at {} (in {}s)", deadline, wait.as_secs());

        tokio::select! {
            _ = cancel.cancelled() => {
                log_system_event("Cleanup service stopped", None);
                return;
            }
            _ = tokio::time::sleep(wait) => {}
        }

        if let Err(e) = purge_old_posts(&db, Utc::now()).await {
            log_database_error("DELETE", "posts", &e.to_string());
        }
    }
}

/// Removes every post older than the current day boundary.
pub async fn purge_old_posts(db: &DatabaseManager, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    let cutoff = today_cutoff(now).timestamp();
    let deleted = Post::purge_before(&db.pool, cutoff).await?;
    let kept = Post::count(&db.pool).await?;
    log_system_event(
        "Old posts purged",
        Some(&format!("{deleted} deleted (timestamp < {cutoff}), {kept} kept")),
    );
    Ok(deleted)
}

/// How long to sleep from `now` until `deadline`; zero if it already passed.
pub fn sleep_duration_until(now: DateTime<Utc>, deadline: DateTime<Utc>) -> std::time::Duration {
    (deadline - now).to_std().unwrap_or_default()
}
