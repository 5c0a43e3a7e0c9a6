//! Browser interaction scripts executed by the provider's remote renderer.
//!
//! Actions are never executed locally; the whole script is serialized to its
//! canonical JSON form (an array of `Action`-tagged objects) and shipped as a
//! single request parameter. Field casing follows the provider's wire format
//! exactly.

use serde::{Deserialize, Serialize};

/// One scripted browser interaction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Action")]
pub enum BrowserAction {
    /// Block until the selector matches an element.
    WaitSelector {
        #[serde(rename = "WaitSelector")]
        wait_selector: String,
        #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
        timeout: Option<u64>,
    },
    /// Pause for a fixed number of milliseconds.
    Wait {
        #[serde(rename = "Timeout")]
        timeout: u64,
    },
    Click {
        #[serde(rename = "Selector")]
        selector: String,
    },
    ScrollX {
        #[serde(rename = "Selector", skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
        #[serde(rename = "Value")]
        value: i64,
    },
    ScrollY {
        #[serde(rename = "Selector", skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
        #[serde(rename = "Value")]
        value: i64,
    },
    ScrollTo {
        #[serde(rename = "Selector", skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
        #[serde(rename = "Value")]
        value: i64,
    },
    /// Type a value into the matched input.
    Fill {
        #[serde(rename = "Selector")]
        selector: String,
        #[serde(rename = "Value")]
        value: String,
    },
    /// Run a JavaScript snippet in the page context.
    Execute {
        #[serde(rename = "Execute")]
        script: String,
    },
    ScreenShot {
        #[serde(rename = "fullScreenShot", skip_serializing_if = "Option::is_none")]
        full_screen_shot: Option<bool>,
        #[serde(rename = "particularScreenShot", skip_serializing_if = "Option::is_none")]
        particular_screen_shot: Option<String>,
    },
}

/// Ordered sequence of actions replayed by the remote renderer.
pub type BrowserScript = Vec<BrowserAction>;
