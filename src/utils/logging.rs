use tracing::{debug, error, info, warn};

/// Logs an incoming command or button press.
pub fn log_command_start(command: &str, user: &str, user_id: u64) {
    info!("CMD_START: {} by {}({})", command, user, user_id);
}

/// Logs a handled command together with the outcome shown to the user.
pub fn log_command_success(command: &str, user_id: u64, outcome: &str) {
    info!("CMD_SUCCESS: {} for {} - {}", command, user_id, outcome);
}

/// Logs a command that could not be completed.
pub fn log_command_error(command: &str, user_id: u64, error: &str) {
    error!("CMD_ERROR: {} for {} - {}", command, user_id, error);
}

/// Logs a statement against one of the stores.
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs a failed statement against one of the stores.
pub fn log_database_error(operation: &str, table: &str, error: &str) {
    error!("DB_ERROR: {} on {} failed: {}", operation, table, error);
}

/// Logs a lookup against the Telegram API that ran out of time.
pub fn log_timeout(operation: &str, duration_secs: u64, details: Option<&str>) {
    match details {
        Some(d) => warn!("TIMEOUT: {} after {}s - {}", operation, duration_secs, d),
        None => warn!("TIMEOUT: {} after {}s", operation, duration_secs),
    }
}

/// Logs process-level events such as startup, shutdown and purges.
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
