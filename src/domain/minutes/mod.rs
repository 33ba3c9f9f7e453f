//! Minutes domain module

mod document;
mod render;
mod system_prompt;

pub use document::{
    ActionItem, DiscussionPoint, MinutesDocument, DATE_NOT_SPECIFIED, DEFAULT_TITLE,
    UNASSIGNED_OWNER,
};
pub use render::{escape_markdown, render_markdown};
pub use system_prompt::MinutesPrompt;
