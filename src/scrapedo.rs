//! High level client orchestration.
//!
//! Wires the request compiler, the transport, the status classifier, and the
//! response normalizer into one asynchronous call per request: description
//! in, [`ScrapeOutcome`] out.

use std::sync::Arc;

use http::{HeaderMap, Method};
use thiserror::Error;
use url::Url;

use crate::request::compiler::{CompileError, compile};
use crate::request::options::ScrapeRequest;
use crate::response::normalizer::{self, NormalizeError};
use crate::response::status;
use crate::response::types::ScrapeOutcome;
use crate::statistics::UsageStatistics;
use crate::transport::{RawResponse, ReqwestTransport, Transport, TransportError};

/// Default public API endpoint.
pub const API_URL: &str = "https://api.scrape.do";

/// Result alias used across the client layer.
pub type ScrapeDoResult<T> = Result<T, ScrapeDoError>;

/// High-level error surfaced by the client.
///
/// Provider-declared errors are not here; they are an expected outcome and
/// arrive as [`ScrapeOutcome::Error`].
#[derive(Debug, Error)]
pub enum ScrapeDoError {
    #[error("request compilation failed: {0}")]
    Compile(#[from] CompileError),
    #[error("http transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("provider rejected the call with status {status}")]
    RejectedStatus { status: u16, body: String },
    #[error("response normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fluent builder for [`ScrapeDo`].
pub struct ScrapeDoBuilder {
    token: String,
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
}

impl ScrapeDoBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: API_URL.to_string(),
            transport: None,
        }
    }

    /// Override the API endpoint, e.g. for a regional gateway or a test
    /// server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Plug in a custom transport implementation.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> ScrapeDoResult<ScrapeDo> {
        let base_url = Url::parse(&self.base_url)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(ScrapeDo {
            token: self.token,
            base_url,
            transport,
        })
    }
}

/// Client for the scrape.do API.
///
/// Holds no mutable state; calls are independent and may be issued
/// concurrently without coordination. Retry, redirect handling, and rate
/// limiting all live on the provider side.
pub struct ScrapeDo {
    token: String,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl ScrapeDo {
    /// Construct a client with the default endpoint and transport.
    pub fn new(token: impl Into<String>) -> ScrapeDoResult<Self> {
        ScrapeDoBuilder::new(token).build()
    }

    /// Obtain a builder to customise the client instance.
    pub fn builder(token: impl Into<String>) -> ScrapeDoBuilder {
        ScrapeDoBuilder::new(token)
    }

    /// Perform a GET scrape.
    pub async fn get(&self, request: &ScrapeRequest) -> ScrapeDoResult<ScrapeOutcome> {
        self.send(Method::GET, request, None).await
    }

    /// Perform a POST scrape with the given upstream body.
    pub async fn post(
        &self,
        request: &ScrapeRequest,
        body: Vec<u8>,
    ) -> ScrapeDoResult<ScrapeOutcome> {
        self.send(Method::POST, request, Some(body)).await
    }

    /// Perform a scrape with an arbitrary method.
    ///
    /// Compiles the request, executes the single outbound call, classifies
    /// the status, and normalizes the response. A rejected status whose body
    /// carries the provider's error envelope still comes back as
    /// [`ScrapeOutcome::Error`]; any other rejection or transport fault is
    /// raised.
    pub async fn send(
        &self,
        method: Method,
        request: &ScrapeRequest,
        body: Option<Vec<u8>>,
    ) -> ScrapeDoResult<ScrapeOutcome> {
        let call = compile(method, request, body)?;

        let mut query = Vec::with_capacity(call.query.len() + 1);
        query.push(("token".to_string(), self.token.clone()));
        query.extend(call.query.iter().cloned());

        log::debug!(
            "-> {} {} ({} params)",
            call.method,
            request.url,
            query.len()
        );

        let raw = self
            .transport
            .execute(
                &call.method,
                &self.base_url,
                &call.headers,
                &query,
                call.body.as_deref(),
            )
            .await?;

        log::debug!("<- {} for {}", raw.status, request.url);

        if !status::accepts(raw.status, request.transparent_response) {
            return self.recover_or_raise(raw, request);
        }

        Ok(normalizer::normalize(&raw, &request.url, request.return_json)?)
    }

    fn recover_or_raise(
        &self,
        raw: RawResponse,
        request: &ScrapeRequest,
    ) -> ScrapeDoResult<ScrapeOutcome> {
        if let Some(error) = normalizer::recover_rejected(&raw, &request.url) {
            log::warn!(
                "provider error for {}: {}",
                request.url,
                error.message.join("; ")
            );
            return Ok(ScrapeOutcome::Error(error));
        }

        Err(ScrapeDoError::RejectedStatus {
            status: raw.status,
            body: raw.body_text(),
        })
    }

    /// Fetch subscription statistics, a stateless pass-through GET.
    pub async fn statistics(&self) -> ScrapeDoResult<UsageStatistics> {
        let url = self.base_url.join("/info")?;
        let query = vec![("token".to_string(), self.token.clone())];

        let raw = self
            .transport
            .execute(&Method::GET, &url, &HeaderMap::new(), &query, None)
            .await?;

        Ok(serde_json::from_slice(&raw.body)?)
    }
}
