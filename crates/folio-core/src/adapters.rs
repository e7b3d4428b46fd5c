use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One stateless completion turn: the fixed system instruction plus the
/// current user message. No transcript history is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    pub model: String,
    pub system_instruction: String,
    pub user_text: String,
}

#[async_trait]
pub trait ChatModelProvider: Send + Sync {
    async fn health_check(&self) -> Result<(), CoreError>;
    async fn generate_reply(&self, request: ChatTurnRequest) -> Result<String, CoreError>;
}

/// The user-editable, not-yet-submitted contact form data. Doubles as the
/// relay's JSON request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All three fields carry non-blank content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn health_check(&self) -> Result<(), CoreError>;
    async fn deliver(&self, draft: &ContactDraft) -> Result<(), CoreError>;
}
