//! Segmentation domain - normalization of heterogeneous histogram and
//! cohort payloads into uniform display-ready sequences.

mod buckets;
mod churn;
mod timezone;

pub use buckets::{SegmentBucket, SegmentSeries};
pub use churn::{normalize_churn_payload, ChurnCandidate};
pub use timezone::TimezoneBreakdown;
