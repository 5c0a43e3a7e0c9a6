//! # scrapedo-rs
//!
//! Async Rust client for the [scrape.do](https://scrape.do) scraping API.
//!
//! The crate compiles a typed scrape request into the provider's wire
//! parameters, performs a single outbound HTTP call, and normalizes the
//! provider's heterogeneous response shapes back into one uniform result.
//!
//! ## Features
//!
//! - Header, cookie, and proxy directives with structural exclusivity rules
//! - Remote browser scripting (wait, click, scroll, fill, execute, screenshot)
//! - Provider-aware status classification and transparent mode
//! - Typed success / JSON-rendered / provider-error outcomes
//! - Billing and redirect metadata from the provider's response headers
//!
//! ## Example
//!
//! ```no_run
//! use scrapedo_rs::{ScrapeDo, ScrapeOutcome, ScrapeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScrapeDo::new("API_TOKEN")?;
//!     let request = ScrapeRequest::builder("https://httpbin.co/anything")
//!         .with_render(false)
//!         .build()?;
//!
//!     match client.get(&request).await? {
//!         ScrapeOutcome::Content(content) => println!("{}", content.text()),
//!         ScrapeOutcome::Json(json) => println!("{:?}", json.fields),
//!         ScrapeOutcome::Error(error) => eprintln!("{:?}", error.message),
//!     }
//!     Ok(())
//! }
//! ```

mod scrapedo;

pub mod request;
pub mod response;
pub mod statistics;
pub mod transport;

pub use crate::scrapedo::{API_URL, ScrapeDo, ScrapeDoBuilder, ScrapeDoError, ScrapeDoResult};

pub use crate::request::browser::{BrowserAction, BrowserScript};
pub use crate::request::compiler::{CompileError, CompiledCall, EXTRA_HEADER_PREFIX, compile};
pub use crate::request::geo::{GeoCode, RegionalGeoCode};
pub use crate::request::options::{
    Device, HeaderPolicy, OutputFormat, ScrapeRequest, ScrapeRequestBuilder, WaitUntil,
};

pub use crate::response::normalizer::{NormalizeError, normalize, recover_rejected};
pub use crate::response::status::accepts;
pub use crate::response::types::{
    ActionResult, ContentResponse, JsonResponse, ProviderError, ProviderMetadata, ScrapeOutcome,
    ScreenShot,
};

pub use crate::statistics::UsageStatistics;

pub use crate::transport::{RawResponse, ReqwestTransport, Transport, TransportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
