//! Compilation of a [`ScrapeRequest`] into wire form.
//!
//! Produces the outbound header map, the flattened query parameter list, and
//! the body for one call. Header values travel only in the header channel;
//! the parameter channel carries boolean presence markers instead, so the
//! provider learns *that* a family was supplied without seeing its values.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::collections::HashMap;
use thiserror::Error;

use super::options::{HeaderPolicy, ScrapeRequest};

/// Prefix the provider expects on extra-header keys.
pub const EXTRA_HEADER_PREFIX: &str = "sd-";

/// Failure states raised before any network traffic happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("setCookies cannot be used with customHeaders, extraHeaders or forwardHeaders")]
    ConflictingHeaderDirective,
    #[error("GET method does not support a body")]
    BodyNotAllowed,
    #[error("failed to convert header '{0}'")]
    InvalidHeader(String),
}

/// Wire form of one call. Transient; built per request and never reused.
#[derive(Debug, Clone)]
pub struct CompiledCall {
    pub method: Method,
    pub headers: HeaderMap,
    /// Ordered key/value pairs. Repeated keys encode lists without bracket
    /// indices, which is what the provider's parser expects.
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Compile `request` for the given method and optional body.
pub fn compile(
    method: Method,
    request: &ScrapeRequest,
    body: Option<Vec<u8>>,
) -> Result<CompiledCall, CompileError> {
    if method == Method::GET && body.is_some() {
        return Err(CompileError::BodyNotAllowed);
    }

    let headers = merge_headers(&request.headers)?;
    let query = flatten_params(request);

    Ok(CompiledCall {
        method,
        headers,
        query,
        body,
    })
}

/// Merge the header families into the outbound map.
///
/// Precedence on key collision, later wins: custom, then extra (prefixed),
/// then forward. Cookie policies contribute no headers; cookies travel as a
/// query parameter.
fn merge_headers(policy: &HeaderPolicy) -> Result<HeaderMap, CompileError> {
    let mut merged = HeaderMap::new();

    if let HeaderPolicy::Headers {
        custom,
        extra,
        forward,
    } = policy
    {
        insert_all(&mut merged, custom, None)?;
        insert_all(&mut merged, extra, Some(EXTRA_HEADER_PREFIX))?;
        insert_all(&mut merged, forward, None)?;
    }

    Ok(merged)
}

fn insert_all(
    map: &mut HeaderMap,
    headers: &HashMap<String, String>,
    prefix: Option<&str>,
) -> Result<(), CompileError> {
    for (key, value) in headers {
        let key = match prefix {
            Some(prefix) if !key.starts_with(prefix) => format!("{prefix}{key}"),
            _ => key.clone(),
        };
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| CompileError::InvalidHeader(key.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| CompileError::InvalidHeader(key.clone()))?;
        map.insert(name, header_value);
    }
    Ok(())
}

/// Cookie map rendered as one `key=value;` string, every segment terminated.
/// BTreeMap iteration keeps the output deterministic (lexicographic by key).
fn encode_cookies(cookies: &std::collections::BTreeMap<String, String>) -> String {
    let mut encoded = String::new();
    for (key, value) in cookies {
        encoded.push_str(key);
        encoded.push('=');
        encoded.push_str(value);
        encoded.push(';');
    }
    encoded
}

/// Flatten the request into its documented wire parameters.
///
/// Off-by-default flags are omitted entirely; the provider reads absence as
/// false. Header families collapse to presence markers.
fn flatten_params(request: &ScrapeRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    let mut push = |key: &str, value: String| params.push((key.to_string(), value));

    push("url", request.url.clone());

    if request.super_proxy {
        push("super", "true".into());
    }
    if let Some(code) = request.geo_code {
        push("geoCode", code.as_str().into());
    }
    if let Some(region) = request.regional_geo_code {
        push("regionalGeoCode", region.as_str().into());
    }
    if let Some(ref session) = request.session_id {
        push("sessionId", session.clone());
    }

    if request.render {
        push("render", "true".into());
    }
    if let Some(event) = request.wait_until {
        push("waitUntil", event.as_str().into());
    }
    if let Some(wait) = request.custom_wait {
        push("customWait", wait.to_string());
    }
    if let Some(ref selector) = request.wait_selector {
        push("waitSelector", selector.clone());
    }
    if let Some(width) = request.width {
        push("width", width.to_string());
    }
    if let Some(height) = request.height {
        push("height", height.to_string());
    }
    if request.block_resources {
        push("blockResources", "true".into());
    }
    if request.screen_shot {
        push("screenShot", "true".into());
    }
    if request.full_screen_shot {
        push("fullScreenShot", "true".into());
    }
    if let Some(ref selector) = request.particular_screen_shot {
        push("particularScreenShot", selector.clone());
    }
    if let Some(ref script) = request.play_with_browser {
        // Canonical JSON form of the whole action sequence, one parameter.
        let serialized =
            serde_json::to_string(script).expect("browser script serialization is infallible");
        push("playWithBrowser", serialized);
    }
    if request.return_json {
        push("returnJSON", "true".into());
    }

    if let Some(timeout) = request.timeout {
        push("timeout", timeout.to_string());
    }
    if let Some(retry) = request.retry_timeout {
        push("retryTimeout", retry.to_string());
    }
    if request.disable_retry {
        push("disableRetry", "true".into());
    }
    if request.disable_redirection {
        push("disableRedirection", "true".into());
    }
    if let Some(ref callback) = request.callback {
        push("callback", callback.clone());
    }
    if let Some(device) = request.device {
        push("device", device.as_str().into());
    }
    if let Some(output) = request.output {
        push("output", output.as_str().into());
    }
    if request.transparent_response {
        push("transparentResponse", "true".into());
    }

    match &request.headers {
        HeaderPolicy::None => {}
        HeaderPolicy::Headers {
            custom,
            extra,
            forward,
        } => {
            if !custom.is_empty() {
                push("customHeaders", "true".into());
            }
            if !extra.is_empty() {
                push("extraHeaders", "true".into());
            }
            if !forward.is_empty() {
                push("forwardHeaders", "true".into());
            }
        }
        HeaderPolicy::Cookies(cookies) => {
            push("setCookies", encode_cookies(cookies));
        }
    }

    params
}
