//! LoadInfrastructureHandler - storage and platform health page.

use std::sync::Arc;

use futures::join;

use crate::domain::foundation::ReportingPeriod;
use crate::domain::insights::{RetentionSplit, StorageStats};
use crate::domain::revenue::SalesTrend;
use crate::domain::segmentation::SegmentSeries;
use crate::ports::AnalyticsReader;

use super::super::page::{section, PageLoad};

/// Render-ready model for the infrastructure page.
#[derive(Debug, Clone, Default)]
pub struct InfrastructureModel {
    pub storage: StorageStats,

    pub devices: SegmentSeries,

    /// All-time sales roll-up shown under the storage cards.
    pub sales: SalesTrend,

    pub retention: RetentionSplit,
}

/// Loads the infrastructure page in one settled batch.
pub struct LoadInfrastructureHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl LoadInfrastructureHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> PageLoad<InfrastructureModel> {
        let (storage, devices, sales, retention) = join!(
            self.reader.storage_stats(),
            self.reader.device_split(),
            self.reader.sales_trend(ReportingPeriod::Total),
            self.reader.retention_split(),
        );

        let mut failed = Vec::new();
        let model = InfrastructureModel {
            storage: section("storage", storage, &mut failed),
            devices: section("devices", devices, &mut failed),
            sales: section("sales", sales, &mut failed),
            retention: section("retention", retention, &mut failed),
        };

        PageLoad {
            model,
            section_count: 4,
            failed_sections: failed,
        }
    }
}
