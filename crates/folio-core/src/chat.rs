use std::sync::Arc;

use serde_json::json;

use crate::{ChatModelProvider, ChatTurnRequest, Portfolio};

/// Returned without any network attempt when no credential is configured.
pub const OFFLINE_REPLY: &str =
    "I'm sorry, my brain (API key) is currently offline. Please check back later!";

/// Returned when the provider resolves but carries no usable reply text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I processed that, but couldn't generate a text response.";

/// Returned when the provider call fails for any reason.
pub const ERROR_REPLY: &str =
    "I encountered an error while thinking about that. Please try again.";

/// Wraps the hosted completion provider behind a single infallible call.
/// Failures never propagate to the caller; the transcript has no
/// error-rendering path, so every outcome is an ordinary model turn.
pub struct ChatBridge {
    provider: Option<Arc<dyn ChatModelProvider>>,
    model: String,
    system_instruction: String,
}

impl ChatBridge {
    /// A bridge with `provider: None` is offline: `ask` short-circuits to
    /// the fixed offline sentence and performs no I/O.
    pub fn new(
        provider: Option<Arc<dyn ChatModelProvider>>,
        model: impl Into<String>,
        portfolio: &Portfolio,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            system_instruction: system_instruction_for(portfolio),
        }
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub async fn ask(&self, user_text: &str) -> String {
        let Some(provider) = self.provider.as_ref() else {
            return OFFLINE_REPLY.to_owned();
        };

        let request = ChatTurnRequest {
            model: self.model.clone(),
            system_instruction: self.system_instruction.clone(),
            user_text: user_text.to_owned(),
        };

        match provider.generate_reply(request).await {
            Ok(reply) if reply.trim().is_empty() => {
                tracing::warn!("chat provider resolved without any reply text");
                EMPTY_REPLY_FALLBACK.to_owned()
            }
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(error = %error, "chat completion failed");
                ERROR_REPLY.to_owned()
            }
        }
    }
}

/// The fixed instruction sent with every completion call: persona framing
/// plus a JSON snapshot of the portfolio facts. Static across calls; the
/// transcript is never sent back to the API.
pub fn system_instruction_for(portfolio: &Portfolio) -> String {
    let snapshot = json!({
        "profile": portfolio.profile,
        "projects": portfolio.projects,
        "experience": portfolio.experience,
        "skills": portfolio.skills,
    });

    format!(
        "You are {assistant}, the AI assistant for {owner}'s portfolio.\n\
         You help visitors learn about {owner}'s work, projects, skills, and experience.\n\
         Be friendly, professional, and informative. Use a conversational tone.\n\
         Answer questions about {owner}'s background, technical skills, projects, and achievements.\n\
         Context:\n{snapshot}",
        assistant = portfolio.assistant.name,
        owner = portfolio.profile.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, Portfolio};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedProvider {
        reply: Result<String, CoreError>,
        calls: Mutex<Vec<ChatTurnRequest>>,
    }

    impl ScriptedProvider {
        fn new(reply: Result<String, CoreError>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatModelProvider for ScriptedProvider {
        async fn health_check(&self) -> Result<(), CoreError> {
            Ok(())
        }

        async fn generate_reply(&self, request: ChatTurnRequest) -> Result<String, CoreError> {
            self.calls.lock().expect("call log lock").push(request);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(CoreError::DependencyUnavailable(message)) => {
                    Err(CoreError::DependencyUnavailable(message.clone()))
                }
                Err(CoreError::Configuration(message)) => {
                    Err(CoreError::Configuration(message.clone()))
                }
            }
        }
    }

    #[tokio::test]
    async fn offline_bridge_resolves_without_touching_a_provider() {
        let bridge = ChatBridge::new(None, "gemini-2.5-flash", &Portfolio::showcase());
        assert!(!bridge.is_online());
        assert_eq!(bridge.ask("anything at all").await, OFFLINE_REPLY);
        assert_eq!(bridge.ask("").await, OFFLINE_REPLY);
    }

    #[tokio::test]
    async fn provider_reply_passes_through_unchanged() {
        let provider = Arc::new(ScriptedProvider::new(Ok("Here is my answer.".to_owned())));
        let bridge = ChatBridge::new(
            Some(provider.clone() as Arc<dyn ChatModelProvider>),
            "gemini-2.5-flash",
            &Portfolio::showcase(),
        );

        assert_eq!(bridge.ask("what do you build?").await, "Here is my answer.");

        let calls = provider.calls.lock().expect("call log lock");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user_text, "what do you build?");
        assert_eq!(calls[0].model, "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn blank_provider_reply_maps_to_the_fixed_fallback() {
        let provider: Arc<dyn ChatModelProvider> =
            Arc::new(ScriptedProvider::new(Ok("   ".to_owned())));
        let bridge = ChatBridge::new(Some(provider), "gemini-2.5-flash", &Portfolio::showcase());
        assert_eq!(bridge.ask("hello").await, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_the_fixed_apology() {
        let provider: Arc<dyn ChatModelProvider> = Arc::new(ScriptedProvider::new(Err(
            CoreError::DependencyUnavailable("boom".to_owned()),
        )));
        let bridge = ChatBridge::new(Some(provider), "gemini-2.5-flash", &Portfolio::showcase());
        assert_eq!(bridge.ask("hello").await, ERROR_REPLY);
    }

    #[test]
    fn system_instruction_embeds_the_portfolio_snapshot() {
        let portfolio = Portfolio::showcase();
        let instruction = system_instruction_for(&portfolio);

        assert!(instruction.contains(portfolio.assistant.name.as_str()));
        assert!(instruction.contains(portfolio.profile.name.as_str()));
        for project in &portfolio.projects {
            assert!(instruction.contains(project.title.as_str()));
        }
    }
}
