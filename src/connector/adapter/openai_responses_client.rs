use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::application::ResponseProvider;
use crate::domain::{ClientConfig, DomainError, ProviderError, ProviderResponse, ResponseRequest};

const RESPONSES_PATH: &str = "/v1/responses";

/// Minimal subset of the Responses API object we care about.
#[derive(Deserialize)]
struct ApiResponse {
    id: String,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    /// Concatenation of every `output_text` part across all output items.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// HTTP client for the OpenAI Responses API (and compatible servers).
///
/// Issues exactly one `POST /v1/responses` per call. No retries and no
/// client-side timeout: whatever the transport does is what the caller gets.
pub struct OpenAiResponsesClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + RESPONSES_PATH).
    url: String,
}

impl OpenAiResponsesClient {
    /// Fails with [`DomainError::Configuration`] when `api_key` is blank.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, DomainError> {
        let api_key: String = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DomainError::configuration(
                "OPENAI_API_KEY is not set; an API key is required",
            ));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DomainError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            url: format!("{}{}", base_url.trim_end_matches('/'), RESPONSES_PATH),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, DomainError> {
        let key = config.api_key().unwrap_or_default();
        Self::new(key, config.base_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn error_from_status(status: u16, body: &str) -> ProviderError {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => {
                let detail = envelope.error;
                let mut err = ProviderError::api(status, detail.message.unwrap_or_else(|| body.to_string()));
                if let Some(kind) = detail.error_type {
                    err = err.with_error_type(kind);
                }
                if let Some(code) = detail.code {
                    err = err.with_code(code);
                }
                err
            }
            Err(_) => ProviderError::api(status, body),
        }
    }

    /// The request URL is logged here and left out of the error text, which
    /// is scanned for classification keywords.
    fn error_from_transport(e: reqwest::Error) -> ProviderError {
        if let Some(url) = e.url() {
            debug!("OpenAiResponsesClient: transport failure for {url}");
        }
        let timed_out = e.is_timeout();
        let detail = e.without_url().to_string();
        if timed_out {
            ProviderError::timeout(detail)
        } else {
            ProviderError::transport(detail)
        }
    }
}

#[async_trait]
impl ResponseProvider for OpenAiResponsesClient {
    async fn create_response(&self, request: &ResponseRequest) -> Result<ProviderResponse, ProviderError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(Self::error_from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("OpenAiResponsesClient: API returned {status}: {body}");
            return Err(Self::error_from_status(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(Self::error_from_transport)?;
        let api_response: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::invalid_response(format!("failed to parse response: {e}")))?;

        debug!("OpenAiResponsesClient: received response {}", api_response.id);

        let text = api_response.output_text();
        Ok(ProviderResponse::new(api_response.id, text))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
