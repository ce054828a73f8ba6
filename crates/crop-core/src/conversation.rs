//! Question/answer history for the interactive session

use serde::{Deserialize, Serialize};

/// Number of most recent exchanges replayed into each prompt
pub const PROMPT_HISTORY_LIMIT: usize = 3;

/// One question and the answer it received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
}

impl ConversationTurn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Append-only history. Everything is kept for the log; prompts only see
/// the last [`PROMPT_HISTORY_LIMIT`] turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Turns eligible for prompt construction, oldest first
    pub fn recent(&self) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(PROMPT_HISTORY_LIMIT);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_is_bounded_but_history_is_not() {
        let mut conversation = Conversation::new();
        assert!(conversation.recent().is_empty());

        for i in 1..=5 {
            conversation.push(ConversationTurn::new(format!("q{}", i), format!("a{}", i)));
        }

        assert_eq!(conversation.len(), 5);
        let recent: Vec<&str> = conversation
            .recent()
            .iter()
            .map(|t| t.question.as_str())
            .collect();
        assert_eq!(recent, vec!["q3", "q4", "q5"]);
    }

    #[test]
    fn test_recent_with_short_history() {
        let mut conversation = Conversation::new();
        conversation.push(ConversationTurn::new("only", "one"));
        assert_eq!(conversation.recent().len(), 1);
    }
}
