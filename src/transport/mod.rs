//! Transport abstraction between the request pipeline and the wire.
//!
//! The client core never talks to reqwest directly; it goes through the
//! [`Transport`] trait so tests can replay canned responses and callers can
//! plug in their own instrumented clients.

mod reqwest_client;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use thiserror::Error;
use url::Url;

pub use reqwest_client::ReqwestTransport;

/// Contract for the single outbound HTTP call the client performs.
///
/// Implementations must not retry or follow provider-level redirects on
/// their own; the remote API owns both behaviours.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        query: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse, TransportError>;
}

/// Minimal response representation returned by the transport abstraction.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    /// Body decoded as UTF-8, lossily. Provider error envelopes and JSON
    /// payloads are always UTF-8; scraped content may not be.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport error: {0}")]
    Transport(String),
}
