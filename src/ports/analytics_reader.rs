//! Read-side port for the analytics backend.
//!
//! One method per consumed endpoint, each returning an
//! already-normalized domain type. Reporting periods are forwarded
//! verbatim; the reader never interprets them.

use async_trait::async_trait;

use crate::domain::foundation::ReportingPeriod;
use crate::domain::insights::{FeatureRank, RetentionSplit, StorageStats, TopUser};
use crate::domain::provisioning::{AdminLogEntry, SelectOption};
use crate::domain::revenue::{RevenueBreakdown, SalesTrend};
use crate::domain::segmentation::{ChurnCandidate, SegmentSeries, TimezoneBreakdown};

use super::ApiError;

/// Read-only port over every analytics GET endpoint.
#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    /// Unique users active today.
    async fn daily_active_users(&self) -> Result<u64, ApiError>;

    /// Unique users active over the last 7 days.
    async fn weekly_active_users(&self) -> Result<u64, ApiError>;

    /// Gateway-keyed revenue mapping for a reporting period.
    async fn revenue(&self, period: ReportingPeriod) -> Result<RevenueBreakdown, ApiError>;

    /// Sales timeline for a reporting period.
    async fn sales_trend(&self, period: ReportingPeriod) -> Result<SalesTrend, ApiError>;

    /// Engagement streak bands (Ghosts through Addicted).
    async fn streak_bands(&self) -> Result<SegmentSeries, ApiError>;

    /// Feature popularity ranking.
    async fn feature_ranking(&self) -> Result<Vec<FeatureRank>, ApiError>;

    /// Users grouped by local timezone.
    async fn timezone_breakdown(&self) -> Result<TimezoneBreakdown, ApiError>;

    /// Top spenders leaderboard.
    async fn top_users(&self) -> Result<Vec<TopUser>, ApiError>;

    /// Tool-call volume segments.
    async fn usage_buckets(&self) -> Result<SegmentSeries, ApiError>;

    /// High-streak users currently inactive.
    async fn churn_risk(&self) -> Result<Vec<ChurnCandidate>, ApiError>;

    /// Object-storage usage.
    async fn storage_stats(&self) -> Result<StorageStats, ApiError>;

    /// Device ecosystem split.
    async fn device_split(&self) -> Result<SegmentSeries, ApiError>;

    /// Auto-renew retention split.
    async fn retention_split(&self) -> Result<RetentionSplit, ApiError>;

    /// User picker options for the grant form.
    async fn user_options(&self) -> Result<Vec<SelectOption>, ApiError>;

    /// Plan picker options for the grant form.
    async fn plan_options(&self) -> Result<Vec<SelectOption>, ApiError>;

    /// Recent override actions.
    async fn admin_logs(&self) -> Result<Vec<AdminLogEntry>, ApiError>;
}
