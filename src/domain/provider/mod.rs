//! Provider domain module

mod error_category;
mod provider_id;

pub use error_category::{classify_error, default_error_message, ErrorCategory};
pub use provider_id::{ProviderId, ALL_PROVIDERS};
