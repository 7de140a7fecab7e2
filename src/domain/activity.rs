//! Active-user counts and derived engagement ratios.

use serde::Serialize;

/// Daily and weekly active-user counts for the overview header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    /// Unique users active today.
    pub daily_active: u64,

    /// Unique users active in the last 7 days.
    pub weekly_active: u64,
}

impl ActivitySnapshot {
    pub fn new(daily_active: u64, weekly_active: u64) -> Self {
        Self {
            daily_active,
            weekly_active,
        }
    }

    /// Stickiness: DAU / WAU as a percentage.
    ///
    /// A zero denominator yields a defined 0.0, not an error.
    pub fn stickiness_percent(&self) -> f64 {
        if self.weekly_active == 0 {
            return 0.0;
        }
        (self.daily_active as f64 / self.weekly_active as f64) * 100.0
    }
}
