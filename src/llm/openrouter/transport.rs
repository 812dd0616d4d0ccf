//! HTTP transport used by the OpenRouter client

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::core::error::GatewayError;

/// A fully built outbound POST
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Value of the first header named `name`
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and full body of an upstream response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and reads the whole response
///
/// Any failure before a status line is received must map to
/// [`GatewayError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: OutboundRequest) -> Result<RawResponse, GatewayError>;
}

/// reqwest-backed transport
///
/// No request timeout is configured; a stalled upstream holds the caller
/// for as long as the connection stays open.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: OutboundRequest) -> Result<RawResponse, GatewayError> {
        let mut builder = self.http_client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
