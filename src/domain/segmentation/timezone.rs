//! Timezone distribution read model.

use serde::Serialize;

use super::SegmentSeries;

/// Active users grouped by local timezone, in source order.
///
/// The sequence is a pass-through: the backend's order drives the
/// chart axis, so nothing is re-sorted here.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneBreakdown {
    /// Per-timezone user counts.
    pub buckets: SegmentSeries,

    /// Name of the timezone with the most users, if any.
    pub busiest: Option<String>,
}

impl TimezoneBreakdown {
    pub fn new(buckets: SegmentSeries, busiest: Option<String>) -> Self {
        Self { buckets, busiest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segmentation::SegmentBucket;

    #[test]
    fn keeps_source_order_and_busiest_label() {
        let breakdown = TimezoneBreakdown::new(
            SegmentSeries::from_buckets([
                SegmentBucket::new("Asia/Kolkata", 120),
                SegmentBucket::new("America/Toronto", 45),
            ]),
            Some("Asia/Kolkata".to_string()),
        );

        assert_eq!(breakdown.buckets.len(), 2);
        assert_eq!(breakdown.buckets.buckets()[0].label, "Asia/Kolkata");
        assert_eq!(breakdown.busiest.as_deref(), Some("Asia/Kolkata"));
    }

    #[test]
    fn default_is_empty_with_no_busiest() {
        let breakdown = TimezoneBreakdown::default();
        assert!(breakdown.buckets.is_empty());
        assert!(breakdown.busiest.is_none());
    }
}
