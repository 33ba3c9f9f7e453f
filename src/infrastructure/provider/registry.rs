//! Provider registry
//!
//! Maps a [`ProviderId`] to its adapter. Adding a vendor means adding a
//! variant and one match arm here.

use crate::application::ports::{AiProvider, ProviderConfig, ProviderSetupError};
use crate::domain::provider::ProviderId;

use super::openai::OpenAiProvider;

/// Create the provider named in the config
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, ProviderSetupError> {
    tracing::debug!(provider = %config.provider, "creating provider");

    match config.provider {
        ProviderId::OpenAi => Ok(Box::new(OpenAiProvider::new(config)?) as Box<dyn AiProvider>),
    }
}
