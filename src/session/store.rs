use tracing::debug;

use super::history::Turn;

/// Ordered, append-only log of the turns of one interactive session.
///
/// The only removal is [`SessionStore::clear`], which drops every turn at once.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    turns: Vec<Turn>,
}

impl SessionStore {
    pub fn new() -> Self { Self::default() }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Trims `raw` and records it as an operator turn. Blank input appends nothing.
    pub fn submit(&mut self, raw: &str) -> Option<&Turn> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.append(Turn::operator(text));
        self.turns.last()
    }

    pub fn clear(&mut self) {
        debug!(turns = self.turns.len(), "clearing session history");
        self.turns.clear();
    }

    pub fn snapshot(&self) -> &[Turn] { &self.turns }

    pub fn last(&self) -> Option<&Turn> { self.turns.last() }

    pub fn len(&self) -> usize { self.turns.len() }

    pub fn is_empty(&self) -> bool { self.turns.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::history::Speaker;

    #[test]
    fn test_submit_trims_input() {
        let mut store = SessionStore::new();
        let turn = store.submit("  is this clip real?\n").unwrap();
        assert_eq!(turn.text(), "is this clip real?");
        assert_eq!(turn.speaker(), Speaker::Operator);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut store = SessionStore::new();
        assert!(store.submit("").is_none());
        assert!(store.submit(" \t\n ").is_none());
        assert!(store.is_empty());
    }
}
