//! Configuration storage adapters

pub mod xdg;

pub use xdg::{XdgConfigStore, APP_DIR};
