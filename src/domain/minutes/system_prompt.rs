//! Prompts for minutes generation

use crate::domain::transcript::Transcript;

/// System instruction fixing the minutes JSON schema
const MINUTES_INSTRUCTION: &str = r#"You are an expert at creating professional meeting minutes.
Given a transcript, create well-structured meeting minutes and return them as a JSON object with the following structure:

{
    "title": "Meeting title/subject (inferred from content)",
    "date": "Date if mentioned, otherwise 'Not specified'",
    "attendees": ["List of attendees if mentioned, otherwise empty array"],
    "summary": "Brief 2-3 sentence summary of the meeting",
    "discussion_points": [
        {
            "topic": "Topic name",
            "details": "Key points discussed"
        }
    ],
    "decisions": ["List of decisions made during the meeting"],
    "action_items": [
        {
            "task": "Description of the action item",
            "owner": "Person responsible (if mentioned, otherwise 'Unassigned')",
            "due_date": "Due date if mentioned, otherwise null"
        }
    ],
    "next_steps": ["List of next steps or follow-up items"]
}

Return ONLY valid JSON, no markdown formatting or additional text."#;

/// Lead-in placed before the transcript in the user message
const USER_LEAD_IN: &str = "Create meeting minutes from this transcript:";

/// Value object holding the system and user messages for one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinutesPrompt {
    system: String,
    user: String,
}

impl MinutesPrompt {
    /// Build the prompt pair for a transcript
    pub fn build(transcript: &Transcript) -> Self {
        Self {
            system: MINUTES_INSTRUCTION.to_string(),
            user: format!("{}\n\n{}", USER_LEAD_IN, transcript.as_str()),
        }
    }

    /// Get the system instruction
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Get the user message
    pub fn user(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_names_every_field() {
        let prompt = MinutesPrompt::build(&Transcript::new("hi").unwrap());
        for field in [
            "\"title\"",
            "\"date\"",
            "\"attendees\"",
            "\"summary\"",
            "\"discussion_points\"",
            "\"decisions\"",
            "\"action_items\"",
            "\"owner\"",
            "\"due_date\"",
            "\"next_steps\"",
        ] {
            assert!(prompt.system().contains(field), "missing {field}");
        }
    }

    #[test]
    fn system_forbids_markdown() {
        let prompt = MinutesPrompt::build(&Transcript::new("hi").unwrap());
        assert!(prompt.system().contains("Return ONLY valid JSON"));
    }

    #[test]
    fn user_carries_transcript() {
        let transcript = Transcript::new("Alice: let's ship Friday.").unwrap();
        let prompt = MinutesPrompt::build(&transcript);
        assert!(prompt.user().starts_with(USER_LEAD_IN));
        assert!(prompt.user().ends_with("Alice: let's ship Friday."));
    }
}
