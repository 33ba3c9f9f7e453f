//! AI provider adapters

pub mod openai;
pub mod registry;

pub use openai::{OpenAiProvider, OPENAI_API_BASE};
pub use registry::create_provider;
