//! Transcript domain module

mod input_kind;
mod text;

pub use input_kind::{AudioFormat, InputKind};
pub use text::Transcript;
