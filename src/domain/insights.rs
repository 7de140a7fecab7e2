//! Leaderboard and infrastructure read models.
//!
//! These are ephemeral per-fetch views; each carries a typed empty
//! default so a failed section renders as zeroes rather than crashing
//! the page.

use serde::{Deserialize, Serialize};

/// One row of the feature popularity ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRank {
    pub feature_name: String,
    pub unique_users: u64,
}

/// One row of the top-spenders leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopUser {
    #[serde(rename = "user__email")]
    pub user_email: String,
    pub current_credits: i64,
    pub total_usage: u64,
}

/// Object-storage usage as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageStats {
    #[serde(default)]
    pub total_storage_gb: f64,

    #[serde(default)]
    pub active_storage_gb: f64,

    /// Deleted but still billed under the retention window.
    #[serde(default)]
    pub deleted_storage_gb: f64,

    #[serde(default)]
    pub object_count: u64,
}

/// Auto-renew split across active subscriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionSplit {
    pub auto_renew_on: u64,
    pub auto_renew_off: u64,
}

impl RetentionSplit {
    /// Builds the split from the backend's positional data array;
    /// missing entries read as zero.
    pub fn from_counts(counts: &[u64]) -> Self {
        Self {
            auto_renew_on: counts.first().copied().unwrap_or(0),
            auto_renew_off: counts.get(1).copied().unwrap_or(0),
        }
    }
}
