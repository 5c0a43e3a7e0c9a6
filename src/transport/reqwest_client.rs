//! Reqwest-based implementation of the [`Transport`] trait.
//!
//! Provides a thin adapter around `reqwest::Client` that converts between the
//! shared HTTP representations used by the request pipeline and the concrete
//! transport.

use async_trait::async_trait;
use http::{
    HeaderMap as HttpHeaderMap, HeaderName as HttpHeaderName, HeaderValue as HttpHeaderValue,
    Method as HttpMethod,
};
use reqwest::{Client, Method, header::HeaderMap};

use super::{RawResponse, Transport, TransportError};
use url::Url;

/// Reqwest-backed transport used for live calls against the API.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|err| TransportError::Transport(err.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client, e.g. one configured with a local
    /// proxy or custom TLS settings.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new().expect("failed to create reqwest transport")
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        method: &HttpMethod,
        url: &Url,
        headers: &HttpHeaderMap,
        query: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse, TransportError> {
        let req_method = map_method(method)?;
        let req_headers = convert_headers(headers)?;

        let mut builder = self
            .client
            .request(req_method, url.as_str())
            .headers(req_headers)
            .query(query);

        if let Some(data) = body {
            builder = builder.body(data.to_vec());
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::Transport(err.to_string()))?;

        to_raw_response(response).await
    }
}

fn map_method(method: &HttpMethod) -> Result<Method, TransportError> {
    Method::from_bytes(method.as_str().as_bytes())
        .map_err(|err| TransportError::Transport(err.to_string()))
}

fn convert_headers(headers: &HttpHeaderMap) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers.iter() {
        let name = reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes())
            .map_err(|err| TransportError::Transport(err.to_string()))?;
        let value = reqwest::header::HeaderValue::from_bytes(value.as_bytes())
            .map_err(|err| TransportError::Transport(err.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

async fn to_raw_response(response: reqwest::Response) -> Result<RawResponse, TransportError> {
    let status = response.status().as_u16();
    let headers = convert_back_headers(response.headers())?;
    let body = response
        .bytes()
        .await
        .map_err(|err| TransportError::Transport(err.to_string()))?;

    Ok(RawResponse {
        status,
        headers,
        body,
    })
}

fn convert_back_headers(map: &HeaderMap) -> Result<HttpHeaderMap, TransportError> {
    let mut headers = HttpHeaderMap::new();
    for (name, value) in map.iter() {
        let http_name = HttpHeaderName::from_bytes(name.as_str().as_bytes())
            .map_err(|err| TransportError::Transport(err.to_string()))?;
        let http_value = HttpHeaderValue::from_bytes(value.as_bytes())
            .map_err(|err| TransportError::Transport(err.to_string()))?;
        headers.insert(http_name, http_value);
    }
    Ok(headers)
}
