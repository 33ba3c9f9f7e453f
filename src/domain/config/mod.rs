//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_FORMAT, DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT_SECS};
