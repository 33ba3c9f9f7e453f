//! minutes-scribe - meeting minutes from transcripts and recordings
//!
//! This crate turns an uploaded transcript or audio recording into structured
//! meeting minutes using a pluggable AI provider (OpenAI today).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Transcripts, minutes documents, provider ids, the error classifier
//! - **Application**: The minutes generation façade and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (OpenAI, ffprobe, XDG config, stats file)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
