//! Raw revenue payload shapes.
//!
//! The backend reports revenue as a mapping from gateway name to an
//! ordered list of per-currency entries. The shape is inconsistent at
//! the edges: currency codes arrive in any casing and `gross` can be a
//! number, a numeric string, null, or missing. Decoding is lenient by
//! contract - a malformed amount is zero, never an error.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Currency, Gateway};

/// One gateway's revenue in a single currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayRevenueEntry {
    /// Currency code as received (not guaranteed consistently cased).
    pub currency: String,

    /// Nested metrics object carrying the gross amount.
    #[serde(default)]
    pub metrics: RevenueMetrics,
}

impl GatewayRevenueEntry {
    /// Convenience constructor used by aggregation callers and tests.
    pub fn new(currency: impl Into<String>, gross: f64) -> Self {
        Self {
            currency: currency.into(),
            metrics: RevenueMetrics { gross },
        }
    }

    /// The gross amount, already sanitized at decode time.
    pub fn gross(&self) -> f64 {
        self.metrics.gross
    }
}

/// Per-entry metrics as reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueMetrics {
    /// Gross transacted amount before deductions.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub gross: f64,
}

/// The gateway-keyed revenue mapping for one reporting period.
///
/// A gateway absent from the mapping is equivalent to zero revenue in
/// all currencies. Keys are kept exactly as received; lookups and
/// aggregation normalize to uppercase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevenueBreakdown {
    entries: BTreeMap<String, Vec<GatewayRevenueEntry>>,
}

impl RevenueBreakdown {
    /// An empty mapping (zero revenue everywhere).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a mapping from (gateway name, entries) pairs.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<GatewayRevenueEntry>)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Iterates over (gateway name, entries) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GatewayRevenueEntry])> {
        self.entries
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// True when no gateway reported any entry.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|entries| entries.is_empty())
    }

    /// Sums gross over the mapping, optionally filtered by gateway
    /// and/or currency. Currency comparison is case-insensitive.
    ///
    /// A filter that matches nothing yields 0.0, never an error; the
    /// caller never needs a presence check before arithmetic.
    pub fn gross_where(&self, gateway: Option<Gateway>, currency: Option<Currency>) -> f64 {
        self.entries
            .iter()
            .filter(|(name, _)| match gateway {
                Some(g) => name.trim().eq_ignore_ascii_case(g.as_str()),
                None => true,
            })
            .flat_map(|(_, entries)| entries.iter())
            .filter(|entry| match currency {
                Some(c) => c.matches_code(&entry.currency),
                None => true,
            })
            .map(GatewayRevenueEntry::gross)
            .sum()
    }
}

/// Accepts a number, a numeric string, null, or garbage; anything that
/// does not parse to a finite number becomes 0.0.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(0.0))
}
