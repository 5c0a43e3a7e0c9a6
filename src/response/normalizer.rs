//! Normalization of raw transport responses into [`ScrapeOutcome`].
//!
//! Decision order, first match wins:
//! 1. JSON-return requests decode the body and spread its top-level fields.
//! 2. A body carrying the provider's `Message` envelope becomes an error
//!    outcome, regardless of HTTP status.
//! 3. Anything else is raw content.
//!
//! The rejected-status path reuses step 2 so an error envelope is never
//! misreported, and leaves every other transport failure to the caller.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::transport::RawResponse;

use super::types::{
    ContentResponse, ErrorEnvelope, JsonResponse, ProviderError, ProviderMetadata, ScrapeOutcome,
};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("failed to decode JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("JSON body is not an object")]
    NotAnObject,
}

/// Normalize a classified-success response.
///
/// Never fails for non-JSON requests; a JSON-return request whose body does
/// not decode to an object is a malformed provider answer and surfaces as
/// [`NormalizeError`].
pub fn normalize(
    raw: &RawResponse,
    request_url: &str,
    return_json: bool,
) -> Result<ScrapeOutcome, NormalizeError> {
    let meta = ProviderMetadata::from_headers(&raw.headers);

    if return_json {
        let decoded: JsonValue = serde_json::from_slice(&raw.body)?;
        let JsonValue::Object(fields) = decoded else {
            return Err(NormalizeError::NotAnObject);
        };

        return Ok(ScrapeOutcome::Json(JsonResponse {
            url: request_url.to_string(),
            status_code: raw.status,
            meta,
            fields,
        }));
    }

    if let Some(error) = error_envelope(raw, request_url) {
        return Ok(ScrapeOutcome::Error(error));
    }

    Ok(ScrapeOutcome::Content(ContentResponse {
        url: request_url.to_string(),
        status_code: raw.status,
        content: raw.body.clone(),
        meta,
    }))
}

/// Recovery path for rejected statuses: surface the provider's error
/// envelope when the body carries one, otherwise let the caller propagate
/// the transport failure unchanged.
pub fn recover_rejected(raw: &RawResponse, request_url: &str) -> Option<ProviderError> {
    error_envelope(raw, request_url)
}

fn error_envelope(raw: &RawResponse, request_url: &str) -> Option<ProviderError> {
    let envelope: ErrorEnvelope = serde_json::from_slice(&raw.body).ok()?;
    // Only the Message field marks a body as an error envelope; other JSON
    // bodies are scraped content.
    envelope.message.as_ref()?;
    Some(envelope.into_provider_error(request_url, raw.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn plain_body_normalizes_to_content_unchanged() {
        let raw = raw(200, "<html><body>hello</body></html>");
        let outcome = normalize(&raw, "https://example.com", false).unwrap();

        match outcome {
            ScrapeOutcome::Content(content) => {
                assert_eq!(content.text(), "<html><body>hello</body></html>");
                assert_eq!(content.status_code, 200);
                assert_eq!(content.url, "https://example.com");
            }
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[test]
    fn message_envelope_on_http_success_is_an_error() {
        let raw = raw(
            200,
            r#"{"Message":["bad url"],"PossibleCauses":["typo"],"Contact":"support@scrape.do"}"#,
        );
        let outcome = normalize(&raw, "https://example.com", false).unwrap();

        match outcome {
            ScrapeOutcome::Error(error) => {
                assert_eq!(error.message, vec!["bad url".to_string()]);
                assert_eq!(error.possible_causes, vec!["typo".to_string()]);
                assert_eq!(error.contact.as_deref(), Some("support@scrape.do"));
                assert_eq!(error.status_code, 200);
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn json_body_without_message_is_still_content() {
        let raw = raw(200, r#"{"data":[1,2,3]}"#);
        let outcome = normalize(&raw, "https://example.com", false).unwrap();
        assert!(matches!(outcome, ScrapeOutcome::Content(_)));
    }

    #[test]
    fn return_json_spreads_top_level_fields() {
        let mut headers = HeaderMap::new();
        headers.insert("Scrape.do-Request-Cost", HeaderValue::from_static("5"));
        let raw = RawResponse {
            status: 200,
            headers,
            body: Bytes::from_static(
                br#"{"actionResults":[{"action":"Wait","success":true,"index":0}]}"#,
            ),
        };

        let outcome = normalize(&raw, "https://example.com", true).unwrap();
        match outcome {
            ScrapeOutcome::Json(json) => {
                assert_eq!(json.meta.request_cost.as_deref(), Some("5"));
                let results = json.action_results().unwrap();
                assert_eq!(results[0].action, "Wait");
                assert_eq!(
                    json.field("actionResults").unwrap(),
                    &serde_json::json!([{"action":"Wait","success":true,"index":0}])
                );
            }
            other => panic!("expected json, got {other:?}"),
        }
    }

    #[test]
    fn return_json_with_non_json_body_fails() {
        let raw = raw(200, "<html></html>");
        assert!(normalize(&raw, "https://example.com", true).is_err());
    }

    #[test]
    fn rejected_body_with_envelope_recovers_to_provider_error() {
        let raw = raw(
            502,
            r#"{"URL":"https://example.com","StatusCode":502,"Message":["target unreachable"]}"#,
        );
        let error = recover_rejected(&raw, "https://example.com").unwrap();
        assert_eq!(error.status_code, 502);
        assert_eq!(error.message, vec!["target unreachable".to_string()]);
    }

    #[test]
    fn rejected_body_without_envelope_is_not_recovered() {
        assert!(recover_rejected(&raw(503, "Bad Gateway"), "https://example.com").is_none());
        assert!(recover_rejected(&raw(503, r#"{"note":"no envelope"}"#), "https://example.com").is_none());
    }
}
