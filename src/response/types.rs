//! Normalized result shapes and provider side-channel metadata.

use bytes::Bytes;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Result of one scrape call, exactly one of three shapes.
///
/// A provider-declared error is an expected outcome and therefore a variant
/// here, not a Rust error; only contract violations and transport faults are
/// raised.
#[derive(Debug, Clone)]
pub enum ScrapeOutcome {
    /// Opaque scraped content (HTML, text, or binary).
    Content(ContentResponse),
    /// JSON-rendered response with the provider's top-level fields.
    Json(JsonResponse),
    /// Structured error envelope declared by the provider.
    Error(ProviderError),
}

impl ScrapeOutcome {
    /// Status code carried by whichever shape was produced.
    pub fn status_code(&self) -> u16 {
        match self {
            ScrapeOutcome::Content(content) => content.status_code,
            ScrapeOutcome::Json(json) => json.status_code,
            ScrapeOutcome::Error(error) => error.status_code,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScrapeOutcome::Error(_))
    }
}

/// Billing, cookie, and redirect side-information the provider attaches as
/// response headers, distinct from the scraped content itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub cookies: Option<String>,
    pub remaining_credits: Option<String>,
    pub request_cost: Option<String>,
    pub resolved_url: Option<String>,
    pub target_url: Option<String>,
    pub initial_status_code: Option<String>,
    pub target_redirected_location: Option<String>,
}

impl ProviderMetadata {
    /// Read the fixed provider header names from a response header map.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        Self {
            cookies: get("Scrape.do-Cookies"),
            remaining_credits: get("Scrape.do-Remaining-Credits"),
            request_cost: get("Scrape.do-Request-Cost"),
            resolved_url: get("Scrape.do-Resolved-Url"),
            target_url: get("Scrape.do-Target-Url"),
            initial_status_code: get("Scrape.do-Initial-Status-Code"),
            target_redirected_location: get("Scrape.do-Target-Redirected-Location"),
        }
    }
}

/// Raw success: the scraped document plus metadata.
#[derive(Debug, Clone)]
pub struct ContentResponse {
    pub url: String,
    pub status_code: u16,
    pub content: Bytes,
    pub meta: ProviderMetadata,
}

impl ContentResponse {
    /// Content decoded as UTF-8, lossily. Binary payloads should use
    /// [`content`](Self::content) directly.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}

/// JSON-rendered success: the provider's decoded top-level fields, kept
/// verbatim, with typed accessors for the documented ones.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub url: String,
    pub status_code: u16,
    pub meta: ProviderMetadata,
    pub fields: JsonMap<String, JsonValue>,
}

impl JsonResponse {
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }

    /// Rendered page content, when the provider included it.
    pub fn content(&self) -> Option<&str> {
        self.field("content").and_then(JsonValue::as_str)
    }

    pub fn network_requests(&self) -> Option<&Vec<JsonValue>> {
        self.field("networkRequests").and_then(JsonValue::as_array)
    }

    pub fn websocket_responses(&self) -> Option<&Vec<JsonValue>> {
        self.field("websocketResponses")
            .and_then(JsonValue::as_array)
    }

    /// Per-action results of the replayed browser script.
    pub fn action_results(&self) -> Option<Vec<ActionResult>> {
        self.field("actionResults")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn screen_shots(&self) -> Option<Vec<ScreenShot>> {
        self.field("screenShots")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Outcome of one replayed browser action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<JsonValue>,
}

/// Screenshot captured during rendering, base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenShot {
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured error the provider embeds in a response body. Can arrive on
/// any status, including HTTP success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub url: String,
    pub status_code: u16,
    pub message: Vec<String>,
    pub possible_causes: Vec<String>,
    pub contact: Option<String>,
}

/// Wire form of the provider's error envelope. Presence of `Message` is what
/// marks a body as an error.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "StatusCode")]
    pub status_code: Option<u16>,
    #[serde(rename = "Message")]
    pub message: Option<Vec<String>>,
    #[serde(rename = "PossibleCauses")]
    pub possible_causes: Option<Vec<String>>,
    #[serde(rename = "Contact")]
    pub contact: Option<String>,
}

impl ErrorEnvelope {
    /// Fold the envelope into a [`ProviderError`], falling back to the
    /// request URL and observed status where the body omits its own.
    pub fn into_provider_error(self, request_url: &str, observed_status: u16) -> ProviderError {
        ProviderError {
            url: self.url.unwrap_or_else(|| request_url.to_string()),
            status_code: self.status_code.unwrap_or(observed_status),
            message: self.message.unwrap_or_default(),
            possible_causes: self.possible_causes.unwrap_or_default(),
            contact: self.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn metadata_reads_the_fixed_provider_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Scrape.do-Remaining-Credits",
            HeaderValue::from_static("41950"),
        );
        headers.insert("Scrape.do-Request-Cost", HeaderValue::from_static("10"));
        headers.insert(
            "Scrape.do-Target-Url",
            HeaderValue::from_static("https://example.com"),
        );

        let meta = ProviderMetadata::from_headers(&headers);
        assert_eq!(meta.remaining_credits.as_deref(), Some("41950"));
        assert_eq!(meta.request_cost.as_deref(), Some("10"));
        assert_eq!(meta.target_url.as_deref(), Some("https://example.com"));
        assert_eq!(meta.cookies, None);
        assert_eq!(meta.target_redirected_location, None);
    }

    #[test]
    fn json_response_exposes_typed_action_results() {
        let payload: JsonMap<String, JsonValue> = serde_json::from_str(
            r#"{"actionResults":[{"action":"Wait","success":true,"index":0}],"content":"<html></html>"}"#,
        )
        .unwrap();

        let response = JsonResponse {
            url: "https://example.com".into(),
            status_code: 200,
            meta: ProviderMetadata::default(),
            fields: payload,
        };

        let results = response.action_results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].action, "Wait");
        assert!(results[0].success);
        assert_eq!(response.content(), Some("<html></html>"));
    }

    #[test]
    fn envelope_falls_back_to_request_context() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"Message":["bad url"]}"#).unwrap();
        let error = envelope.into_provider_error("https://example.com", 200);

        assert_eq!(error.url, "https://example.com");
        assert_eq!(error.status_code, 200);
        assert_eq!(error.message, vec!["bad url".to_string()]);
        assert!(error.possible_causes.is_empty());
        assert_eq!(error.contact, None);
    }
}
