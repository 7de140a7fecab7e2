//! LoadOverviewHandler - the system overview page.
//!
//! Five reads fan out in one batch: daily actives, weekly actives,
//! daily revenue, feature ranking, streak bands. Each settles
//! independently and a failed member renders its section's empty
//! default.

use std::sync::Arc;

use futures::join;

use crate::domain::activity::ActivitySnapshot;
use crate::domain::foundation::ReportingPeriod;
use crate::domain::insights::FeatureRank;
use crate::domain::revenue::RevenueAggregate;
use crate::domain::segmentation::SegmentSeries;
use crate::ports::AnalyticsReader;

use super::super::page::{section, PageLoad};

/// Render-ready model for the overview page.
#[derive(Debug, Clone, Default)]
pub struct OverviewModel {
    pub activity: ActivitySnapshot,

    /// DAU / WAU ratio as a percentage; 0.0 when WAU is zero.
    pub stickiness_percent: f64,

    /// Today's revenue, reconciled per currency and per gateway.
    pub revenue: RevenueAggregate,

    pub feature_ranking: Vec<FeatureRank>,

    pub streak_bands: SegmentSeries,
}

/// Loads the overview page in one settled batch.
pub struct LoadOverviewHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl LoadOverviewHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> PageLoad<OverviewModel> {
        let (dau, wau, revenue, ranking, streaks) = join!(
            self.reader.daily_active_users(),
            self.reader.weekly_active_users(),
            self.reader.revenue(ReportingPeriod::Daily),
            self.reader.feature_ranking(),
            self.reader.streak_bands(),
        );

        let mut failed = Vec::new();
        let daily_active = section("daily_active_users", dau, &mut failed);
        let weekly_active = section("weekly_active_users", wau, &mut failed);
        let breakdown = section("revenue", revenue, &mut failed);
        let feature_ranking = section("feature_ranking", ranking, &mut failed);
        let streak_bands = section("streak_bands", streaks, &mut failed);

        let activity = ActivitySnapshot::new(daily_active, weekly_active);
        let model = OverviewModel {
            stickiness_percent: activity.stickiness_percent(),
            activity,
            revenue: RevenueAggregate::reconcile(&breakdown),
            feature_ranking,
            streak_bands,
        };

        PageLoad {
            model,
            section_count: 5,
            failed_sections: failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::StubAnalyticsReader;
    use crate::domain::foundation::Currency;
    use crate::domain::revenue::{GatewayRevenueEntry, RevenueBreakdown};

    fn full_stub() -> StubAnalyticsReader {
        StubAnalyticsReader {
            dau: Some(50),
            wau: Some(200),
            revenue: Some(RevenueBreakdown::from_entries([(
                "STRIPE",
                vec![GatewayRevenueEntry::new("USD", 120.0)],
            )])),
            ranking: Some(vec![FeatureRank {
                feature_name: "summaries".to_string(),
                unique_users: 31,
            }]),
            streaks: Some(SegmentSeries::zip(
                &["Ghosts".to_string(), "Casuals".to_string()],
                &[10, 20],
            )),
            ..StubAnalyticsReader::default()
        }
    }

    #[tokio::test]
    async fn loads_every_section_when_healthy() {
        let handler = LoadOverviewHandler::new(Arc::new(full_stub()));
        let load = handler.handle().await;

        assert!(!load.is_degraded());
        assert_eq!(load.model.activity.daily_active, 50);
        assert!((load.model.stickiness_percent - 25.0).abs() < 1e-9);
        assert_eq!(load.model.revenue.currency_total(Currency::Usd), 120.0);
        assert_eq!(load.model.feature_ranking.len(), 1);
        assert_eq!(load.model.streak_bands.total(), 30);
    }

    #[tokio::test]
    async fn failed_revenue_section_defaults_without_sinking_the_page() {
        let mut stub = full_stub();
        stub.revenue = None;
        let handler = LoadOverviewHandler::new(Arc::new(stub));

        let load = handler.handle().await;

        assert!(load.is_degraded());
        assert!(!load.is_total_failure());
        assert_eq!(load.failed_sections, vec!["revenue"]);
        assert_eq!(load.model.revenue.grand_total(), 0.0);
        // The live sections are untouched.
        assert_eq!(load.model.activity.weekly_active, 200);
    }

    #[tokio::test]
    async fn everything_down_is_a_total_failure_with_zeroed_model() {
        let handler = LoadOverviewHandler::new(Arc::new(StubAnalyticsReader::default()));
        let load = handler.handle().await;

        assert!(load.is_total_failure());
        assert_eq!(load.failed_sections.len(), 5);
        assert_eq!(load.model.activity.daily_active, 0);
        assert_eq!(load.model.stickiness_percent, 0.0);
        assert!(load.model.streak_bands.is_empty());
    }

    #[tokio::test]
    async fn zero_weekly_actives_yield_zero_stickiness() {
        let mut stub = full_stub();
        stub.wau = Some(0);
        let handler = LoadOverviewHandler::new(Arc::new(stub));

        let load = handler.handle().await;
        assert_eq!(load.model.stickiness_percent, 0.0);
    }
}
