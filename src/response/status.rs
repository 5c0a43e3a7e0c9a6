//! Status classification for provider responses.
//!
//! The provider relays the scraped site's status code, so most 4xx answers
//! are successful scrapes, not API failures. The accepted set below is
//! provider policy, kept as an opaque table rather than derived from HTTP
//! semantics; 5xx gateway failures and 429 stay outside it.

/// 4xx codes the provider documents as successful scrape outcomes.
const ACCEPTED_CLIENT_ERRORS: &[u16] = &[
    400, 401, 404, 405, 406, 409, 410, 411, 413, 414, 415, 416, 417, 418, 422, 424, 426, 428,
];

/// Decide whether a response status counts as a logical success.
///
/// In transparent mode every status is accepted and the caller inspects the
/// raw code itself.
pub fn accepts(status: u16, transparent_response: bool) -> bool {
    if transparent_response {
        return true;
    }

    matches!(status, 100..=299 | 300..=399) || ACCEPTED_CLIENT_ERRORS.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn informational_success_and_redirect_ranges_are_accepted() {
        for status in [100, 101, 200, 204, 299, 301, 302, 308, 399] {
            assert!(accepts(status, false), "status {status} should be accepted");
        }
    }

    #[test]
    fn listed_client_errors_are_accepted() {
        for status in [400, 401, 404, 418, 428] {
            assert!(accepts(status, false), "status {status} should be accepted");
        }
    }

    #[test]
    fn gateway_failures_and_rate_limits_are_rejected() {
        for status in [402, 403, 429, 500, 502, 503, 504] {
            assert!(!accepts(status, false), "status {status} should be rejected");
        }
    }

    #[test]
    fn transparent_mode_accepts_everything() {
        for status in [200, 403, 429, 502, 504] {
            assert!(accepts(status, true), "status {status} should be accepted");
        }
    }
}
