//! Reporting period value object.
//!
//! Periods are opaque to the reconciliation layer: they are forwarded
//! to the backend as query parameters and the backend decides which
//! window of entries to return.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Reporting window for revenue and sales queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Daily,
    Weekly,
    Monthly,
    #[default]
    Total,
}

impl ReportingPeriod {
    /// The value sent as the `period` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ReportingPeriod::Daily => "daily",
            ReportingPeriod::Weekly => "weekly",
            ReportingPeriod::Monthly => "monthly",
            ReportingPeriod::Total => "total",
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for ReportingPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ReportingPeriod::Daily),
            "weekly" => Ok(ReportingPeriod::Weekly),
            "monthly" => Ok(ReportingPeriod::Monthly),
            "total" => Ok(ReportingPeriod::Total),
            _ => Err(ValidationError::unknown_variant("period", s)),
        }
    }
}
