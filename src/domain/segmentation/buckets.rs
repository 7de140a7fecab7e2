//! Segment bucket sequences.
//!
//! Legend and axis order in the console follow source order, so
//! normalization never re-sorts. Labels must be unique within a
//! sequence; a duplicate keeps its first occurrence.

use serde::Serialize;

/// One labelled count in a histogram or pie series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBucket {
    pub label: String,
    pub count: u64,
}

impl SegmentBucket {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// An ordered, label-unique sequence of segment buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SegmentSeries {
    buckets: Vec<SegmentBucket>,
}

impl SegmentSeries {
    /// Builds a series from buckets, preserving order and keeping the
    /// first occurrence of any duplicated label.
    pub fn from_buckets<I>(buckets: I) -> Self
    where
        I: IntoIterator<Item = SegmentBucket>,
    {
        let mut seen: Vec<String> = Vec::new();
        let mut unique = Vec::new();
        for bucket in buckets {
            if seen.iter().any(|label| label == &bucket.label) {
                continue;
            }
            seen.push(bucket.label.clone());
            unique.push(bucket);
        }
        Self { buckets: unique }
    }

    /// Zips two parallel sequences index-wise into buckets.
    ///
    /// Mismatched lengths produce only the overlapping prefix; the
    /// shorter sequence is never indexed past its end.
    pub fn zip(labels: &[String], counts: &[u64]) -> Self {
        Self::from_buckets(
            labels
                .iter()
                .zip(counts.iter())
                .map(|(label, count)| SegmentBucket::new(label.clone(), *count)),
        )
    }

    pub fn buckets(&self) -> &[SegmentBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}
