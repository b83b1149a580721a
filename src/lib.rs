//! # Channel Gate Bot
//!
//! A Telegram companion bot for a single channel.
//!
//! ## Features
//! - Mandatory channel subscription before the menu unlocks
//! - Mirrors channel posts and lists today's posts (UTC+5 day)
//! - Nightly purge of yesterday's posts at local midnight
//! - User registry and `/status` statistics
//! - Persistent storage with SQLite

/// Bot command handlers, callbacks and reply texts
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models and connections
pub mod database;
/// Subscription gate, day-boundary arithmetic and the nightly cleanup
pub mod services;
/// Logging, formatting and MarkdownV2 helpers
pub mod utils;
