use crate::Error;
use std::fmt::{self, Display};
use surf::{Body, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

/// A single authenticated call against the LIFX HTTP API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub token: String,
    /// JSON document sent as the request body.
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response [{}]> {}", self.status, self.body)
    }
}

/// Moves an [`ApiRequest`] over the wire.
///
/// Any status the server answers with is a successful exchange; only failing
/// to complete the round trip is an error.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

/// Production transport backed by a `surf` client.
#[derive(Debug, Clone)]
pub struct SurfTransport {
    client: surf::Client,
}

impl SurfTransport {
    pub fn new() -> Self {
        SurfTransport {
            client: surf::Client::new(),
        }
    }
}

impl Default for SurfTransport {
    fn default() -> Self {
        SurfTransport::new()
    }
}

#[async_trait::async_trait]
impl Transport for SurfTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let mut builder = match request.method {
            Method::Get => self.client.get(request.url),
            Method::Put => self.client.put(request.url),
        };
        if let Some(body) = &request.body {
            builder = builder.body(Body::from_json(body)?);
        }
        builder = builder.header("Authorization", format!("Bearer {}", request.token));
        let mut response = builder.await?;
        let status = response.status() as u16;
        // Only kept for diagnostics; the status alone decides the outcome.
        let body = response.body_string().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}
