use serde::{Deserialize, Serialize};

use crate::api::models::ChatMessage;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Operator,
    Assistant,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Operator => "Operator",
            Self::Assistant => "DeepCheck",
        }
    }
}

/// One message in the chat history. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
    timestamp_ms: i64,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn operator(text: impl Into<String>) -> Self { Self::new(Speaker::Operator, text) }

    pub fn assistant(text: impl Into<String>) -> Self { Self::new(Speaker::Assistant, text) }

    pub fn speaker(&self) -> Speaker { self.speaker }

    pub fn text(&self) -> &str { &self.text }

    pub fn timestamp_ms(&self) -> i64 { self.timestamp_ms }

    pub fn to_message(&self) -> ChatMessage {
        match self.speaker {
            Speaker::Operator => ChatMessage::user(self.text.clone()),
            Speaker::Assistant => ChatMessage::assistant(self.text.clone()),
        }
    }
}
