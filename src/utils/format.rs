use console::style;

use crate::session::history::{Speaker, Turn};

pub const EMPTY_LOG: &str = "No messages yet. Conversation log will appear here.";

pub fn success(msg: &str) -> String { style(msg).green().to_string() }
pub fn warn(msg: &str) -> String { style(msg).yellow().to_string() }
pub fn error(msg: &str) -> String { style(msg).red().to_string() }

/// One chat line with a coloured speaker label.
pub fn chat_line(turn: &Turn) -> String {
    let label = match turn.speaker() {
        Speaker::Operator => style(turn.speaker().label()).cyan().bold(),
        Speaker::Assistant => style(turn.speaker().label()).magenta().bold(),
    };
    format!("{} {}", label, turn.text())
}

/// Numbered plain-text log of the whole session, e.g. `1. Operator: ...`.
pub fn forensic_log(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return EMPTY_LOG.to_string();
    }
    turns
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}: {}", i + 1, t.speaker().label(), t.text()))
        .collect::<Vec<_>>()
        .join("\n")
}
