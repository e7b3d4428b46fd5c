use crate::{ChatMessage, ChatRole};

/// The append-only log of chat turns. Seeded with one assistant greeting;
/// messages are never reordered or deleted.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn seeded(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::model(greeting)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::model(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of completed user/model exchanges after the seed message.
    pub fn completed_turns(&self) -> usize {
        self.messages.len().saturating_sub(1) / 2
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Transcript {
    pub fn roles(&self) -> impl Iterator<Item = ChatRole> + '_ {
        self.messages.iter().map(|message| message.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_grows_by_one_pair_per_turn() {
        let mut transcript = Transcript::seeded("hello");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.completed_turns(), 0);

        for turn in 1..=3 {
            transcript.push_user(format!("question {turn}"));
            transcript.push_model(format!("answer {turn}"));
            assert_eq!(transcript.len(), 1 + 2 * turn);
            assert_eq!(transcript.completed_turns(), turn);
        }
    }

    #[test]
    fn appended_pairs_alternate_user_then_model() {
        let mut transcript = Transcript::seeded("hello");
        transcript.push_user("one");
        transcript.push_model("two");
        transcript.push_user("three");
        transcript.push_model("four");

        let roles: Vec<ChatRole> = transcript.roles().collect();
        assert_eq!(roles[0], ChatRole::Model);
        for pair in roles[1..].chunks(2) {
            assert_eq!(pair, [ChatRole::User, ChatRole::Model]);
        }
    }
}
