//! OpenRouter client implementation

use async_trait::async_trait;
use tracing::debug;

use crate::config::{Config, ConfigError, OPENROUTER_API_KEY};
use crate::llm::core::{
    error::GatewayError,
    provider::ChatModel,
    types::{ModelRequest, ModelResponse},
};

use super::transport::{HttpTransport, OutboundRequest, Transport};

/// Chat-completion endpoint
pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Value of the `X-Title` header identifying this client to OpenRouter
pub const CLIENT_TITLE: &str = "Family AI Bot";

/// Model identifiers available through OpenRouter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenRouterModel {
    /// Mistral 7B Instruct
    #[default]
    Mistral7bInstruct,
}

impl OpenRouterModel {
    /// Get the model identifier string for OpenRouter
    pub fn as_str(&self) -> &str {
        match self {
            OpenRouterModel::Mistral7bInstruct => "mistralai/mistral-7b-instruct",
        }
    }
}

/// Client for the OpenRouter chat-completion API
pub struct OpenRouterClient<T = HttpTransport> {
    /// Transport used to reach the API
    transport: T,
    /// Chat-completion URL
    endpoint: String,
    /// Bearer key; absence is reported per call
    api_key: Option<String>,
    /// Sent as `HTTP-Referer`
    app_url: Option<String>,
    /// Model to use
    model: OpenRouterModel,
}

impl OpenRouterClient<HttpTransport> {
    /// Create a client using the process configuration
    pub fn new(config: &Config) -> Self {
        Self::with_transport(
            HttpTransport::new(),
            config.openrouter_api_key.clone(),
            config.app_url.clone(),
        )
    }
}

impl<T: Transport> OpenRouterClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: T, api_key: Option<String>, app_url: Option<String>) -> Self {
        Self {
            transport,
            endpoint: OPENROUTER_URL.to_string(),
            api_key,
            app_url,
            model: OpenRouterModel::default(),
        }
    }

    /// Send requests to `endpoint` instead of the public API
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the POST for a single user message
    fn build_request(&self, api_key: &str, message: &str) -> Result<OutboundRequest, GatewayError> {
        let body = serde_json::to_vec(&ModelRequest::single_user(self.model.as_str(), message))?;

        Ok(OutboundRequest {
            url: self.endpoint.clone(),
            headers: vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", format!("Bearer {}", api_key)),
                ("HTTP-Referer", self.app_url.clone().unwrap_or_default()),
                ("X-Title", CLIENT_TITLE.to_string()),
            ],
            body,
        })
    }
}

#[async_trait]
impl<T: Transport> ChatModel for OpenRouterClient<T> {
    async fn complete(&self, message: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::Missing(OPENROUTER_API_KEY))?;

        let request = self.build_request(api_key, message)?;
        debug!(model = self.model.as_str(), "sending chat completion request");

        let response = self.transport.post(request).await?;
        if !response.is_success() {
            return Err(GatewayError::Upstream {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let parsed: ModelResponse = serde_json::from_slice(&response.body)?;
        parsed.first_content().ok_or(GatewayError::EmptyResponse)
    }
}
