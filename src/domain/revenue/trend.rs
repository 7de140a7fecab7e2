//! Sales trend read model.

use serde::{Deserialize, Serialize};

/// Raw sales trend payload: three parallel sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesTrend {
    #[serde(default)]
    pub dates: Vec<String>,

    #[serde(default)]
    pub inr_values: Vec<f64>,

    #[serde(default)]
    pub usd_values: Vec<f64>,
}

/// One chart-ready point on the sales timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub date: String,
    pub inr: f64,
    pub usd: f64,
}

impl SalesTrend {
    /// Zips the parallel sequences index-wise into points.
    ///
    /// Mismatched lengths produce only the overlapping prefix; no
    /// sequence is ever indexed past its end.
    pub fn points(&self) -> Vec<SalesPoint> {
        self.dates
            .iter()
            .zip(self.inr_values.iter())
            .zip(self.usd_values.iter())
            .map(|((date, inr), usd)| SalesPoint {
                date: date.clone(),
                inr: *inr,
                usd: *usd,
            })
            .collect()
    }

    /// True when the backend reported no transaction history.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
