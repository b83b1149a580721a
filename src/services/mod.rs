pub mod cleanup;
pub mod subscription;
pub mod time_window;
