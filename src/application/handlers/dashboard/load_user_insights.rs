//! LoadUserInsightsHandler - behavioral segmentation page.

use std::sync::Arc;

use futures::join;

use crate::domain::insights::TopUser;
use crate::domain::segmentation::{ChurnCandidate, SegmentSeries, TimezoneBreakdown};
use crate::ports::AnalyticsReader;

use super::super::page::{section, PageLoad};

/// Render-ready model for the user intelligence page.
#[derive(Debug, Clone, Default)]
pub struct UserInsightsModel {
    pub timezones: TimezoneBreakdown,

    pub top_users: Vec<TopUser>,

    /// Tool-call volume segments, pie-ready.
    pub usage_buckets: SegmentSeries,

    /// Empty means "no churn risk detected".
    pub churn_risk: Vec<ChurnCandidate>,
}

/// Loads the user intelligence page in one settled batch.
pub struct LoadUserInsightsHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl LoadUserInsightsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> PageLoad<UserInsightsModel> {
        let (timezones, top_users, usage, churn) = join!(
            self.reader.timezone_breakdown(),
            self.reader.top_users(),
            self.reader.usage_buckets(),
            self.reader.churn_risk(),
        );

        let mut failed = Vec::new();
        let model = UserInsightsModel {
            timezones: section("timezones", timezones, &mut failed),
            top_users: section("top_users", top_users, &mut failed),
            usage_buckets: section("usage_buckets", usage, &mut failed),
            churn_risk: section("churn_risk", churn, &mut failed),
        };

        PageLoad {
            model,
            section_count: 4,
            failed_sections: failed,
        }
    }
}
