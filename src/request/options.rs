//! Scrape request description.
//!
//! A [`ScrapeRequest`] is an immutable value describing one upstream call:
//! which URL to fetch, how the proxy network should route it, what the remote
//! renderer should do, and how the provider should shape its answer. The
//! request carries no transport state; compiling it into wire form is the
//! job of [`crate::request::compiler`].

use std::collections::{BTreeMap, HashMap};

use super::browser::BrowserScript;
use super::compiler::CompileError;
use super::geo::{GeoCode, RegionalGeoCode};

/// Header handling policy for the upstream call.
///
/// The provider accepts either header overrides or cookie injection, never
/// both on the same call. A built request can only hold one of the two; the
/// free-form builder inputs are where the conflict can appear, reported as
/// [`CompileError::ConflictingHeaderDirective`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HeaderPolicy {
    /// No header or cookie directives; the provider picks its own headers.
    #[default]
    None,
    /// Header overrides, merged in fixed precedence order: custom, then
    /// extra, then forward. Later wins on key collision.
    Headers {
        custom: HashMap<String, String>,
        extra: HashMap<String, String>,
        forward: HashMap<String, String>,
    },
    /// Cookies injected into the upstream request. Ordered so the encoded
    /// cookie string is deterministic.
    Cookies(BTreeMap<String, String>),
}

impl HeaderPolicy {
    pub fn is_none(&self) -> bool {
        matches!(self, HeaderPolicy::None)
    }
}

/// Device profile the provider should emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Desktop,
    Mobile,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Mobile => "Mobile",
        }
    }
}

/// Output format of the scraped document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Raw,
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Page lifecycle event the renderer waits for before capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitUntil {
    Load,
    DomContentLoaded,
    NetworkIdle0,
    NetworkIdle2,
}

impl WaitUntil {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitUntil::Load => "load",
            WaitUntil::DomContentLoaded => "domcontentloaded",
            WaitUntil::NetworkIdle0 => "networkidle0",
            WaitUntil::NetworkIdle2 => "networkidle2",
        }
    }
}

/// Description of one scrape call.
///
/// Boolean directives default to off and are only put on the wire when
/// enabled; the provider treats an absent flag as false.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapeRequest {
    /// Target URL. Required.
    pub url: String,
    pub headers: HeaderPolicy,

    // Proxy directives
    pub super_proxy: bool,
    pub geo_code: Option<GeoCode>,
    pub regional_geo_code: Option<RegionalGeoCode>,
    pub session_id: Option<String>,

    // Render directives
    pub render: bool,
    pub wait_until: Option<WaitUntil>,
    pub custom_wait: Option<u64>,
    pub wait_selector: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub block_resources: bool,
    pub screen_shot: bool,
    pub full_screen_shot: bool,
    pub particular_screen_shot: Option<String>,
    pub play_with_browser: Option<BrowserScript>,
    pub return_json: bool,

    // Transport directives
    pub timeout: Option<u64>,
    pub retry_timeout: Option<u64>,
    pub disable_retry: bool,
    pub disable_redirection: bool,
    pub callback: Option<String>,
    pub device: Option<Device>,
    pub output: Option<OutputFormat>,
    pub transparent_response: bool,
}

impl ScrapeRequest {
    /// A plain request for `url` with every directive off.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Obtain a builder, the only way to attach header or cookie directives.
    pub fn builder(url: impl Into<String>) -> ScrapeRequestBuilder {
        ScrapeRequestBuilder::new(url)
    }
}

/// Fluent builder for [`ScrapeRequest`].
///
/// Header families and cookies are collected as free-form optional inputs and
/// validated once at [`build`](ScrapeRequestBuilder::build) time, where the
/// cookie/header conflict is rejected before anything touches the network.
#[derive(Debug, Clone, Default)]
pub struct ScrapeRequestBuilder {
    request: ScrapeRequest,
    custom_headers: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    forward_headers: Option<HashMap<String, String>>,
    set_cookies: Option<BTreeMap<String, String>>,
}

impl ScrapeRequestBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            request: ScrapeRequest::new(url),
            ..Self::default()
        }
    }

    /// Headers that replace the provider's own defaults.
    pub fn with_custom_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_headers = Some(collect_headers(headers));
        self
    }

    /// Provider-directed headers; keys are prefixed `sd-` on the wire unless
    /// already prefixed.
    pub fn with_extra_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_headers = Some(collect_headers(headers));
        self
    }

    /// Headers forwarded to the target exactly as given.
    pub fn with_forward_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.forward_headers = Some(collect_headers(headers));
        self
    }

    /// Cookies injected into the upstream request. Mutually exclusive with
    /// every header family.
    pub fn with_set_cookies<I, K, V>(mut self, cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_cookies = Some(
            cookies
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_super_proxy(mut self, enabled: bool) -> Self {
        self.request.super_proxy = enabled;
        self
    }

    pub fn with_geo_code(mut self, code: GeoCode) -> Self {
        self.request.geo_code = Some(code);
        self
    }

    pub fn with_regional_geo_code(mut self, region: RegionalGeoCode) -> Self {
        self.request.regional_geo_code = Some(region);
        self
    }

    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.request.session_id = Some(id.into());
        self
    }

    pub fn with_render(mut self, enabled: bool) -> Self {
        self.request.render = enabled;
        self
    }

    pub fn with_wait_until(mut self, event: WaitUntil) -> Self {
        self.request.wait_until = Some(event);
        self
    }

    pub fn with_custom_wait(mut self, millis: u64) -> Self {
        self.request.custom_wait = Some(millis);
        self
    }

    pub fn with_wait_selector(mut self, selector: impl Into<String>) -> Self {
        self.request.wait_selector = Some(selector.into());
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.request.width = Some(width);
        self.request.height = Some(height);
        self
    }

    pub fn with_block_resources(mut self, enabled: bool) -> Self {
        self.request.block_resources = enabled;
        self
    }

    pub fn with_screen_shot(mut self, enabled: bool) -> Self {
        self.request.screen_shot = enabled;
        self
    }

    pub fn with_full_screen_shot(mut self, enabled: bool) -> Self {
        self.request.full_screen_shot = enabled;
        self
    }

    pub fn with_particular_screen_shot(mut self, selector: impl Into<String>) -> Self {
        self.request.particular_screen_shot = Some(selector.into());
        self
    }

    pub fn with_play_with_browser(mut self, script: BrowserScript) -> Self {
        self.request.play_with_browser = Some(script);
        self
    }

    pub fn with_return_json(mut self, enabled: bool) -> Self {
        self.request.return_json = enabled;
        self
    }

    pub fn with_timeout(mut self, millis: u64) -> Self {
        self.request.timeout = Some(millis);
        self
    }

    pub fn with_retry_timeout(mut self, millis: u64) -> Self {
        self.request.retry_timeout = Some(millis);
        self
    }

    pub fn with_disable_retry(mut self, disabled: bool) -> Self {
        self.request.disable_retry = disabled;
        self
    }

    pub fn with_disable_redirection(mut self, disabled: bool) -> Self {
        self.request.disable_redirection = disabled;
        self
    }

    pub fn with_callback(mut self, url: impl Into<String>) -> Self {
        self.request.callback = Some(url.into());
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.request.device = Some(device);
        self
    }

    pub fn with_output(mut self, format: OutputFormat) -> Self {
        self.request.output = Some(format);
        self
    }

    pub fn with_transparent_response(mut self, enabled: bool) -> Self {
        self.request.transparent_response = enabled;
        self
    }

    /// Validate the directive combination and produce the request.
    pub fn build(mut self) -> Result<ScrapeRequest, CompileError> {
        let has_header_family = self.custom_headers.is_some()
            || self.extra_headers.is_some()
            || self.forward_headers.is_some();

        if self.set_cookies.is_some() && has_header_family {
            return Err(CompileError::ConflictingHeaderDirective);
        }

        self.request.headers = if let Some(cookies) = self.set_cookies {
            HeaderPolicy::Cookies(cookies)
        } else if has_header_family {
            HeaderPolicy::Headers {
                custom: self.custom_headers.unwrap_or_default(),
                extra: self.extra_headers.unwrap_or_default(),
                forward: self.forward_headers.unwrap_or_default(),
            }
        } else {
            HeaderPolicy::None
        };

        Ok(self.request)
    }
}

fn collect_headers<I, K, V>(headers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    headers
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookies_conflict_with_any_header_family() {
        for build in [
            ScrapeRequest::builder("https://example.com")
                .with_set_cookies([("a", "1")])
                .with_custom_headers([("X-Test", "1")]),
            ScrapeRequest::builder("https://example.com")
                .with_set_cookies([("a", "1")])
                .with_extra_headers([("X-Test", "1")]),
            ScrapeRequest::builder("https://example.com")
                .with_set_cookies([("a", "1")])
                .with_forward_headers([("X-Test", "1")]),
        ] {
            assert!(matches!(
                build.build(),
                Err(CompileError::ConflictingHeaderDirective)
            ));
        }
    }

    #[test]
    fn cookies_alone_build_a_cookie_policy() {
        let request = ScrapeRequest::builder("https://example.com")
            .with_set_cookies([("session", "abc")])
            .build()
            .unwrap();

        match request.headers {
            HeaderPolicy::Cookies(cookies) => {
                assert_eq!(cookies.get("session").map(String::as_str), Some("abc"));
            }
            other => panic!("expected cookie policy, got {other:?}"),
        }
    }

    #[test]
    fn header_families_may_be_combined() {
        let request = ScrapeRequest::builder("https://example.com")
            .with_custom_headers([("A", "1")])
            .with_forward_headers([("B", "2")])
            .build()
            .unwrap();

        match request.headers {
            HeaderPolicy::Headers {
                custom,
                extra,
                forward,
            } => {
                assert_eq!(custom.len(), 1);
                assert!(extra.is_empty());
                assert_eq!(forward.len(), 1);
            }
            other => panic!("expected header policy, got {other:?}"),
        }
    }

    #[test]
    fn plain_request_has_no_header_policy() {
        let request = ScrapeRequest::new("https://example.com");
        assert!(request.headers.is_none());
        assert!(!request.render);
        assert!(!request.transparent_response);
    }
}
