//! Forwarding of a session's turn history to the completion endpoint.

pub mod bridge;
pub mod prompt;
pub mod score;

pub use bridge::{exchange, AssistantBridge, BridgeOutcome, Exchange, DIAGNOSTIC_MARKER};
pub use score::{ContextScore, ScoreError};
