//! Application layer - Use cases and port interfaces
//!
//! Contains the minutes generation façade and the trait definitions
//! for external system interactions.

pub mod minutes;
pub mod ports;

// Re-export use cases
pub use minutes::{
    GeneratorCallbacks, MinutesGenerator, MinutesReport, ResultEnvelope, Stage,
    EMPTY_FILE_MESSAGE, EMPTY_TRANSCRIPTION_MESSAGE, EMPTY_TRANSCRIPT_MESSAGE,
    INVALID_UTF8_MESSAGE,
};
