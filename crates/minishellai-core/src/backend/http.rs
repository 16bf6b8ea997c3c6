use crate::backend::traits::*;
use crate::config::BackendSettings;
use crate::constants::limits;
use crate::error::ShellAiError;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// [`QueryBackend`] speaking plain JSON over HTTP POST.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ShellAiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(limits::BACKEND_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<Self, ShellAiError> {
        Self::new(settings.query_endpoint.clone())
    }
}

#[async_trait::async_trait]
impl QueryBackend for HttpBackend {
    async fn query(&self, payload: &Payload) -> Result<BackendReply, ShellAiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(ShellAiError::backend)?;

        let status = response.status();
        let response_text = response.text().await.map_err(ShellAiError::backend)?;

        if !status.is_success() {
            return Err(ShellAiError::Backend(format!(
                "{} from {}: {}",
                status, self.endpoint, response_text
            )));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| ShellAiError::Backend(format!("Failed to parse response: {e}")))
    }
}
