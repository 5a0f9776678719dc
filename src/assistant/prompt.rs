use crate::api::models::ChatMessage;
use crate::session::history::Turn;

use super::score::ContextScore;

pub const SYSTEM_INSTRUCTION: &str = "You are DeepCheck, a cold and analytical forensic intelligence system. \
Your tone is factual, concise, and objective. \
You analyze deepfake credibility and explain forensic indicators clearly.";

pub fn system_instruction(score: Option<ContextScore>) -> String {
    match score {
        Some(score) => format!(
            "{} The current detected deepfake probability score is {}%.",
            SYSTEM_INSTRUCTION, score
        ),
        None => SYSTEM_INSTRUCTION.to_string(),
    }
}

/// System message first, then every turn in append order.
pub fn build_messages(history: &[Turn], score: Option<ContextScore>) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_instruction(score)));
    messages.extend(history.iter().map(Turn::to_message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ChatRole;

    #[test]
    fn test_zero_score_still_mentioned() {
        let score = ContextScore::new(0.0).unwrap();
        assert!(system_instruction(Some(score)).ends_with("probability score is 0%."));
    }

    #[test]
    fn test_empty_history_yields_only_system() {
        let messages = build_messages(&[], None);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, SYSTEM_INSTRUCTION);
    }
}
