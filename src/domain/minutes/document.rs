//! Structured meeting minutes

use serde::{Deserialize, Deserializer, Serialize};

/// Title used when the model could not infer one
pub const DEFAULT_TITLE: &str = "Meeting Minutes";

/// Sentinel for a meeting date the transcript never mentions
pub const DATE_NOT_SPECIFIED: &str = "Not specified";

/// Owner of an action item nobody volunteered for
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// A topic discussed during the meeting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
}

/// A task coming out of the meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: String,
    #[serde(default = "unassigned", deserialize_with = "owner_or_unassigned")]
    pub owner: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl ActionItem {
    /// Create an action item without an owner or due date
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            owner: unassigned(),
            due_date: None,
        }
    }
}

/// The minutes every provider must produce.
///
/// Fields the model leaves out (or sets to `null`) fall back to their defaults.
/// Values of the wrong JSON type are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinutesDocument {
    #[serde(deserialize_with = "title_or_default")]
    pub title: String,
    #[serde(deserialize_with = "date_or_not_specified")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attendees: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub discussion_points: Vec<DiscussionPoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub decisions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub action_items: Vec<ActionItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub next_steps: Vec<String>,
}

impl Default for MinutesDocument {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date: DATE_NOT_SPECIFIED.to_string(),
            attendees: Vec::new(),
            summary: String::new(),
            discussion_points: Vec::new(),
            decisions: Vec::new(),
            action_items: Vec::new(),
            next_steps: Vec::new(),
        }
    }
}

impl MinutesDocument {
    /// Parse minutes from the raw JSON text a model returned.
    ///
    /// The text must be a single JSON object; fenced or prefixed output is
    /// not repaired.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize as a bare JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn unassigned() -> String {
    UNASSIGNED_OWNER.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank_or<'de, D>(deserializer: D, fallback: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string()))
}

fn title_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    non_blank_or(deserializer, DEFAULT_TITLE)
}

fn date_or_not_specified<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    non_blank_or(deserializer, DATE_NOT_SPECIFIED)
}

fn owner_or_unassigned<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    non_blank_or(deserializer, UNASSIGNED_OWNER)
}
