use tracing::{info, warn};

use crate::api::openai_compat::CompletionEndpoint;
use crate::session::history::Turn;
use crate::session::store::SessionStore;

use super::prompt::build_messages;
use super::score::ContextScore;

/// Prefix carried by every assistant turn produced from a failed call.
pub const DIAGNOSTIC_MARKER: &str = "⚠️ Model Error";

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeOutcome {
    Replied(String),
    Failed(String),
}

impl BridgeOutcome {
    /// Text of the assistant turn this outcome becomes.
    pub fn turn_text(&self) -> String {
        match self {
            Self::Replied(text) => text.clone(),
            Self::Failed(reason) => format!("{}: {}", DIAGNOSTIC_MARKER, reason),
        }
    }

    pub fn is_failure(&self) -> bool { matches!(self, Self::Failed(_)) }
}

/// Stateless forwarder from a turn history to a completion endpoint.
pub struct AssistantBridge<E> {
    endpoint: E,
}

impl<E: CompletionEndpoint> AssistantBridge<E> {
    pub fn new(endpoint: E) -> Self { Self { endpoint } }

    pub fn endpoint(&self) -> &E { &self.endpoint }

    /// One round trip. Endpoint errors come back as [`BridgeOutcome::Failed`].
    pub async fn reply(&self, history: &[Turn], score: Option<ContextScore>) -> BridgeOutcome {
        let messages = build_messages(history, score);
        match self.endpoint.complete(messages).await {
            Ok(text) => {
                info!(history = history.len(), scored = score.is_some(), "assistant replied");
                BridgeOutcome::Replied(text)
            }
            Err(e) => {
                warn!(error = %e, "completion endpoint failed");
                BridgeOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Result of one operator submission that was not blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub question: String,
    pub outcome: BridgeOutcome,
}

/// Records `raw` as an operator turn, asks the bridge, and records the answer.
///
/// Blank input touches nothing and returns `None`. Otherwise the store grows
/// by exactly two turns, whether or not the endpoint call succeeded.
pub async fn exchange<E: CompletionEndpoint>(
    store: &mut SessionStore,
    bridge: &AssistantBridge<E>,
    raw: &str,
    score: Option<ContextScore>,
) -> Option<Exchange> {
    let question = store.submit(raw)?.text().to_string();
    let outcome = bridge.reply(store.snapshot(), score).await;
    store.append(Turn::assistant(outcome.turn_text()));
    Some(Exchange { question, outcome })
}
