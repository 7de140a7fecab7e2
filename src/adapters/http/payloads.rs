//! Wire payload shapes for the analytics backend.
//!
//! Envelope and field names match the backend exactly; conversion into
//! domain types happens in the endpoint adapters. Sequences default to
//! empty so a sparse payload decodes instead of failing.

use serde::Deserialize;

use crate::domain::insights::FeatureRank;
use crate::domain::revenue::RevenueBreakdown;

/// `POST auth/login/` success body.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// `GET analytics/active-users/daily/`.
#[derive(Debug, Deserialize)]
pub(crate) struct DailyActivePayload {
    #[serde(default)]
    pub daily_active_users: u64,
}

/// `GET analytics/active-users/weekly/`.
#[derive(Debug, Deserialize)]
pub(crate) struct WeeklyActivePayload {
    #[serde(default)]
    pub weekly_active_users_count: u64,
}

/// `GET analytics/revenue/?period=` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RevenueEnvelope {
    #[serde(default)]
    pub data: RevenueBreakdown,
}

/// Shared `{labels, data}` histogram shape (usage buckets, devices,
/// retention).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LabelledDataPayload {
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub data: Vec<u64>,
}

/// `GET analytics/streak/` - same shape, counts-keyed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StreakPayload {
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub counts: Vec<u64>,
}

/// `GET analytics/popular/feature/`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FeatureRankingPayload {
    #[serde(default)]
    pub ranking: Vec<FeatureRank>,
}

/// One row of `GET analytics/top-timezone/`.
#[derive(Debug, Deserialize)]
pub(crate) struct TimezoneRow {
    pub timezone: String,

    #[serde(default)]
    pub user_count: u64,
}

/// `GET analytics/top-timezone/`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TimezonePayload {
    #[serde(default)]
    pub all_timezones: Vec<TimezoneRow>,

    #[serde(default)]
    pub timezone_with_most_users: Option<String>,
}
