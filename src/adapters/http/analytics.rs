//! HTTP implementation of the `AnalyticsReader` port.
//!
//! Thin per-endpoint wrappers: fetch through the authenticated client,
//! decode the wire envelope, normalize into domain types.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::ReportingPeriod;
use crate::domain::insights::{FeatureRank, RetentionSplit, StorageStats, TopUser};
use crate::domain::provisioning::{AdminLogEntry, SelectOption};
use crate::domain::revenue::{RevenueBreakdown, SalesTrend};
use crate::domain::segmentation::{
    normalize_churn_payload, ChurnCandidate, SegmentBucket, SegmentSeries, TimezoneBreakdown,
};
use crate::ports::{AnalyticsReader, ApiError};

use super::client::ApiClient;
use super::payloads::{
    DailyActivePayload, FeatureRankingPayload, LabelledDataPayload, RevenueEnvelope,
    StreakPayload, TimezonePayload, WeeklyActivePayload,
};

/// `AnalyticsReader` backed by the console's HTTP choke point.
pub struct HttpAnalyticsReader {
    client: Arc<ApiClient>,
}

impl HttpAnalyticsReader {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsReader for HttpAnalyticsReader {
    async fn daily_active_users(&self) -> Result<u64, ApiError> {
        let payload: DailyActivePayload = self
            .client
            .get_json("analytics/active-users/daily/")
            .await?;
        Ok(payload.daily_active_users)
    }

    async fn weekly_active_users(&self) -> Result<u64, ApiError> {
        let payload: WeeklyActivePayload = self
            .client
            .get_json("analytics/active-users/weekly/")
            .await?;
        Ok(payload.weekly_active_users_count)
    }

    async fn revenue(&self, period: ReportingPeriod) -> Result<RevenueBreakdown, ApiError> {
        let path = format!("analytics/revenue/?period={}", period.as_query_value());
        let envelope: RevenueEnvelope = self.client.get_json(&path).await?;
        Ok(envelope.data)
    }

    async fn sales_trend(&self, period: ReportingPeriod) -> Result<SalesTrend, ApiError> {
        let path = format!("analytics/sales/?period={}", period.as_query_value());
        self.client.get_json(&path).await
    }

    async fn streak_bands(&self) -> Result<SegmentSeries, ApiError> {
        let payload: StreakPayload = self.client.get_json("analytics/streak/").await?;
        Ok(SegmentSeries::zip(&payload.labels, &payload.counts))
    }

    async fn feature_ranking(&self) -> Result<Vec<FeatureRank>, ApiError> {
        let payload: FeatureRankingPayload =
            self.client.get_json("analytics/popular/feature/").await?;
        Ok(payload.ranking)
    }

    async fn timezone_breakdown(&self) -> Result<TimezoneBreakdown, ApiError> {
        let payload: TimezonePayload = self.client.get_json("analytics/top-timezone/").await?;
        let buckets = SegmentSeries::from_buckets(
            payload
                .all_timezones
                .into_iter()
                .map(|row| SegmentBucket::new(row.timezone, row.user_count)),
        );
        Ok(TimezoneBreakdown::new(
            buckets,
            payload.timezone_with_most_users,
        ))
    }

    async fn top_users(&self) -> Result<Vec<TopUser>, ApiError> {
        self.client.get_json("analytics/top-users/").await
    }

    async fn usage_buckets(&self) -> Result<SegmentSeries, ApiError> {
        let payload: LabelledDataPayload =
            self.client.get_json("analytics/top-tool-callers/").await?;
        Ok(SegmentSeries::zip(&payload.labels, &payload.data))
    }

    async fn churn_risk(&self) -> Result<Vec<ChurnCandidate>, ApiError> {
        let raw: serde_json::Value = self.client.get_json("analytics/churn-risk/").await?;
        normalize_churn_payload(raw).map_err(ApiError::from)
    }

    async fn storage_stats(&self) -> Result<StorageStats, ApiError> {
        self.client.get_json("analytics/storage/").await
    }

    async fn device_split(&self) -> Result<SegmentSeries, ApiError> {
        let payload: LabelledDataPayload = self.client.get_json("analytics/device/").await?;
        Ok(SegmentSeries::zip(&payload.labels, &payload.data))
    }

    async fn retention_split(&self) -> Result<RetentionSplit, ApiError> {
        let payload: LabelledDataPayload = self.client.get_json("analytics/retention/").await?;
        Ok(RetentionSplit::from_counts(&payload.data))
    }

    async fn user_options(&self) -> Result<Vec<SelectOption>, ApiError> {
        self.client.get_json("analytics/options/users/").await
    }

    async fn plan_options(&self) -> Result<Vec<SelectOption>, ApiError> {
        self.client.get_json("analytics/options/plans/").await
    }

    async fn admin_logs(&self) -> Result<Vec<AdminLogEntry>, ApiError> {
        self.client.get_json("analytics/admin/logs/").await
    }
}
