pub mod commands;
pub mod context;
pub mod handlers;
pub mod keyboards;
pub mod messages;
