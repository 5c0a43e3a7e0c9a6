//! Subscription statistics, relayed verbatim from the provider.

use serde::{Deserialize, Serialize};

/// Current subscription state as reported by the `/info` endpoint. No local
/// transformation beyond field renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStatistics {
    #[serde(rename = "IsActive")]
    pub is_active: bool,
    #[serde(rename = "ConcurrentRequest")]
    pub concurrent_request: u32,
    #[serde(rename = "MaxMonthlyRequest")]
    pub max_monthly_request: u64,
    #[serde(rename = "RemainingConcurrentRequest")]
    pub remaining_concurrent_request: u32,
    #[serde(rename = "RemainingMonthlyRequest")]
    pub remaining_monthly_request: u64,
}
