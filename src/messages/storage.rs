use super::types::Turn;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only, session-scoped conversation transcript.
///
/// Cleared only by an explicit user action; never persisted beyond the
/// session.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Arc<RwLock<Vec<Turn>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            turns: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn push(&self, turn: Turn) {
        self.turns.write().push(turn);
    }

    pub fn all(&self) -> Vec<Turn> {
        self.turns.read().clone()
    }

    pub fn clear(&self) {
        self.turns.write().clear();
    }

    pub fn len(&self) -> usize {
        self.turns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.read().is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Speaker;

    #[test]
    fn test_append_preserves_order() {
        let transcript = Transcript::new();
        transcript.push(Turn::user("first"));
        transcript.push(Turn::assistant("second"));
        transcript.push(Turn::user("third"));

        let turns = transcript.all();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].text, "first");
        assert_eq!(turns[1].speaker, Speaker::Assistant);
        assert_eq!(turns[2].text, "third");
    }

    #[test]
    fn test_clear() {
        let transcript = Transcript::new();
        transcript.push(Turn::user("hello"));
        assert!(!transcript.is_empty());

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
