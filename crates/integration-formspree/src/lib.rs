use std::fmt;

use async_trait::async_trait;

use folio_core::{ContactDraft, ContactRelay, CoreError};

/// Delivers contact drafts as one JSON POST to the form relay endpoint.
/// Any 2xx response counts as delivered; the response body is never
/// interpreted.
#[derive(Clone)]
pub struct FormspreeContactRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl fmt::Debug for FormspreeContactRelay {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FormspreeContactRelay")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl FormspreeContactRelay {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CoreError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(CoreError::Configuration(
                "contact relay endpoint is empty. Provide a non-empty URL.".to_owned(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent("folio/integration-formspree")
            .build()
            .map_err(|err| {
                CoreError::DependencyUnavailable(format!(
                    "failed to initialize contact relay HTTP client: {err}"
                ))
            })?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactRelay for FormspreeContactRelay {
    async fn health_check(&self) -> Result<(), CoreError> {
        if self.endpoint.trim().is_empty() {
            return Err(CoreError::Configuration(
                "contact relay was initialized without an endpoint.".to_owned(),
            ));
        }
        Ok(())
    }

    async fn deliver(&self, draft: &ContactDraft) -> Result<(), CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|err| {
                CoreError::DependencyUnavailable(format!(
                    "failed to reach the contact relay: {err}"
                ))
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(status = %status, "contact relay rejected the submission");
            Err(CoreError::DependencyUnavailable(format!(
                "contact relay returned HTTP {status}"
            )))
        }
    }
}
