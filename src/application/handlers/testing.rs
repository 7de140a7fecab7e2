//! Configurable stub reader shared by handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::foundation::ReportingPeriod;
use crate::domain::insights::{FeatureRank, RetentionSplit, StorageStats, TopUser};
use crate::domain::provisioning::{AdminLogEntry, SelectOption};
use crate::domain::revenue::{RevenueBreakdown, SalesTrend};
use crate::domain::segmentation::{ChurnCandidate, SegmentSeries, TimezoneBreakdown};
use crate::ports::{AnalyticsReader, ApiError};

/// Stub reader: a `Some` field answers its endpoint, a `None` field
/// fails it with a network error.
#[derive(Default)]
pub(crate) struct StubAnalyticsReader {
    pub dau: Option<u64>,
    pub wau: Option<u64>,
    pub revenue: Option<RevenueBreakdown>,
    pub sales: Option<SalesTrend>,
    pub streaks: Option<SegmentSeries>,
    pub ranking: Option<Vec<FeatureRank>>,
    pub timezones: Option<TimezoneBreakdown>,
    pub top_users: Option<Vec<TopUser>>,
    pub usage: Option<SegmentSeries>,
    pub churn: Option<Vec<ChurnCandidate>>,
    pub storage: Option<StorageStats>,
    pub devices: Option<SegmentSeries>,
    pub retention: Option<RetentionSplit>,
    pub user_options: Option<Vec<SelectOption>>,
    pub plan_options: Option<Vec<SelectOption>>,
    pub logs: Option<Vec<AdminLogEntry>>,

    /// Number of times the admin log endpoint was actually hit.
    pub log_fetches: AtomicUsize,
}

fn answer<T: Clone>(value: &Option<T>) -> Result<T, ApiError> {
    value
        .clone()
        .ok_or_else(|| ApiError::Network("stub: section unavailable".to_string()))
}

#[async_trait]
impl AnalyticsReader for StubAnalyticsReader {
    async fn daily_active_users(&self) -> Result<u64, ApiError> {
        answer(&self.dau)
    }

    async fn weekly_active_users(&self) -> Result<u64, ApiError> {
        answer(&self.wau)
    }

    async fn revenue(&self, _period: ReportingPeriod) -> Result<RevenueBreakdown, ApiError> {
        answer(&self.revenue)
    }

    async fn sales_trend(&self, _period: ReportingPeriod) -> Result<SalesTrend, ApiError> {
        answer(&self.sales)
    }

    async fn streak_bands(&self) -> Result<SegmentSeries, ApiError> {
        answer(&self.streaks)
    }

    async fn feature_ranking(&self) -> Result<Vec<FeatureRank>, ApiError> {
        answer(&self.ranking)
    }

    async fn timezone_breakdown(&self) -> Result<TimezoneBreakdown, ApiError> {
        answer(&self.timezones)
    }

    async fn top_users(&self) -> Result<Vec<TopUser>, ApiError> {
        answer(&self.top_users)
    }

    async fn usage_buckets(&self) -> Result<SegmentSeries, ApiError> {
        answer(&self.usage)
    }

    async fn churn_risk(&self) -> Result<Vec<ChurnCandidate>, ApiError> {
        answer(&self.churn)
    }

    async fn storage_stats(&self) -> Result<StorageStats, ApiError> {
        answer(&self.storage)
    }

    async fn device_split(&self) -> Result<SegmentSeries, ApiError> {
        answer(&self.devices)
    }

    async fn retention_split(&self) -> Result<RetentionSplit, ApiError> {
        answer(&self.retention)
    }

    async fn user_options(&self) -> Result<Vec<SelectOption>, ApiError> {
        answer(&self.user_options)
    }

    async fn plan_options(&self) -> Result<Vec<SelectOption>, ApiError> {
        answer(&self.plan_options)
    }

    async fn admin_logs(&self) -> Result<Vec<AdminLogEntry>, ApiError> {
        self.log_fetches.fetch_add(1, Ordering::SeqCst);
        answer(&self.logs)
    }
}
