use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use folio_core::{ChatModelProvider, ChatTurnRequest, CoreError};

/// Executes one `generateContent` call against the hosted model API.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn execute(
        &self,
        url: String,
        api_key: &str,
        body: Value,
    ) -> Result<Value, CoreError>;
}

#[derive(Clone)]
pub struct ReqwestGenerateTransport {
    client: reqwest::Client,
}

impl ReqwestGenerateTransport {
    pub fn new() -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .user_agent("folio/integration-gemini")
            .build()
            .map_err(|err| {
                CoreError::DependencyUnavailable(format!(
                    "failed to initialize Gemini HTTP client: {err}"
                ))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl GenerateTransport for ReqwestGenerateTransport {
    async fn execute(
        &self,
        url: String,
        api_key: &str,
        body: Value,
    ) -> Result<Value, CoreError> {
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                CoreError::DependencyUnavailable(format!("failed to call the Gemini API: {err}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            CoreError::DependencyUnavailable(format!(
                "failed to read response from the Gemini API: {err}"
            ))
        })?;

        if !status.is_success() {
            return Err(CoreError::DependencyUnavailable(format!(
                "Gemini API returned HTTP {}: {}",
                status,
                truncate_for_error(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|err| {
            CoreError::DependencyUnavailable(format!(
                "failed to parse Gemini response JSON: {err}"
            ))
        })
    }
}

fn truncate_for_error(body: &str) -> String {
    const MAX_LEN: usize = 200;
    if body.chars().count() <= MAX_LEN {
        body.to_owned()
    } else {
        format!("{}...", body.chars().take(MAX_LEN).collect::<String>())
    }
}

pub struct GeminiChatProvider {
    api_key: String,
    base_url: String,
    transport: Arc<dyn GenerateTransport>,
}

impl fmt::Debug for GeminiChatProvider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GeminiChatProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiChatProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, CoreError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CoreError::Configuration(
                "Gemini API key is empty. Provide a non-empty key or run without one.".to_owned(),
            ));
        }

        let transport = ReqwestGenerateTransport::new()?;
        Ok(Self::with_transport(api_key, base_url, Arc::new(transport)))
    }

    pub fn with_transport(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        transport: Arc<dyn GenerateTransport>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            transport,
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ChatModelProvider for GeminiChatProvider {
    async fn health_check(&self) -> Result<(), CoreError> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::Configuration(
                "Gemini provider was initialized without credentials.".to_owned(),
            ));
        }
        Ok(())
    }

    async fn generate_reply(&self, request: ChatTurnRequest) -> Result<String, CoreError> {
        let body = json!({
            "system_instruction": {
                "parts": [{ "text": request.system_instruction }],
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.user_text }],
            }],
        });

        let url = self.generate_url(request.model.as_str());
        let response = self
            .transport
            .execute(url, self.api_key.as_str(), body)
            .await?;

        // Absent or blank reply text resolves to an empty string; the chat
        // bridge maps it to its fixed fallback sentence.
        let reply = extract_reply_text(&response);
        if reply.is_none() {
            tracing::debug!("Gemini response carried no reply text");
        }
        Ok(reply.unwrap_or_default())
    }
}

fn extract_reply_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingTransport {
        response: Value,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingTransport {
        fn new(response: Value) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerateTransport for RecordingTransport {
        async fn execute(
            &self,
            url: String,
            _api_key: &str,
            body: Value,
        ) -> Result<Value, CoreError> {
            self.requests
                .lock()
                .expect("request log lock")
                .push((url, body));
            Ok(self.response.clone())
        }
    }

    fn turn_request() -> ChatTurnRequest {
        ChatTurnRequest {
            model: "gemini-2.5-flash".to_owned(),
            system_instruction: "You are a portfolio assistant.".to_owned(),
            user_text: "What do you build?".to_owned(),
        }
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = GeminiChatProvider::new("   ", "https://example.invalid/v1beta");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn request_body_carries_instruction_and_user_text() {
        let transport = Arc::new(RecordingTransport::new(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I build things." }] } }],
        })));
        let provider = GeminiChatProvider::with_transport(
            "key",
            "https://example.invalid/v1beta/",
            transport.clone(),
        );

        let reply = provider
            .generate_reply(turn_request())
            .await
            .expect("reply");
        assert_eq!(reply, "I build things.");

        let requests = transport.requests.lock().expect("request log lock");
        assert_eq!(requests.len(), 1);
        let (url, body) = &requests[0];
        assert_eq!(
            url,
            "https://example.invalid/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            body["system_instruction"]["parts"][0]["text"],
            "You are a portfolio assistant."
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What do you build?");
    }

    #[tokio::test]
    async fn multiple_reply_parts_are_joined() {
        let transport = Arc::new(RecordingTransport::new(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "there." }] },
            }],
        })));
        let provider =
            GeminiChatProvider::with_transport("key", "https://example.invalid", transport);

        let reply = provider
            .generate_reply(turn_request())
            .await
            .expect("reply");
        assert_eq!(reply, "Hello there.");
    }

    #[tokio::test]
    async fn malformed_response_resolves_to_an_empty_reply() {
        let transport = Arc::new(RecordingTransport::new(json!({ "unexpected": true })));
        let provider =
            GeminiChatProvider::with_transport("key", "https://example.invalid", transport);

        let reply = provider
            .generate_reply(turn_request())
            .await
            .expect("reply");
        assert!(reply.is_empty());
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let transport = Arc::new(RecordingTransport::new(json!({})));
        let provider = GeminiChatProvider::with_transport(
            "super-secret",
            "https://example.invalid",
            transport,
        );
        let rendered = format!("{provider:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("super-secret"));
    }
}
