use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Assistant,
}

/// One conversation turn. Original casing is preserved here; only the
/// responder lower-cases for matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_preserves_casing() {
        let turn = Turn::user("I Saw A PEST");
        assert_eq!(turn.text, "I Saw A PEST");
        assert_eq!(turn.speaker, Speaker::User);
    }

    #[test]
    fn test_turn_serializes() {
        let turn = Turn::assistant("Sawubona!");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("Assistant"));
        assert!(json.contains("Sawubona!"));
    }
}
