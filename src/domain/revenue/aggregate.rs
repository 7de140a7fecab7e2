//! Revenue reconciliation.
//!
//! Turns the heterogeneous gateway-keyed mapping into stable
//! per-currency and per-gateway totals. Aggregates are derived, never
//! persisted: every fetch reconciles from scratch, nothing is mutated
//! incrementally.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{Currency, Gateway};
use crate::domain::revenue::RevenueBreakdown;

/// Per-currency and per-gateway revenue totals for one reporting period.
///
/// Invariant: the sum of per-gateway totals, the sum of per-currency
/// totals, and the sum of all raw entry amounts are equal. Unknown
/// gateway names are retained under their uppercased key so the
/// invariant holds for any payload the backend produces.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAggregate {
    /// Gross totals keyed by uppercased currency code.
    by_currency: BTreeMap<String, f64>,

    /// Gross totals keyed by uppercased gateway name.
    by_gateway: BTreeMap<String, f64>,
}

impl RevenueAggregate {
    /// Reconciles a raw mapping into totals.
    ///
    /// Every entry is accumulated into both accumulators; an empty
    /// mapping yields an all-zero aggregate.
    pub fn reconcile(breakdown: &RevenueBreakdown) -> Self {
        let mut by_currency: BTreeMap<String, f64> = BTreeMap::new();
        let mut by_gateway: BTreeMap<String, f64> = BTreeMap::new();

        for (gateway_name, entries) in breakdown.iter() {
            let gateway_key = gateway_name.trim().to_ascii_uppercase();
            let gateway_total = by_gateway.entry(gateway_key).or_insert(0.0);

            for entry in entries {
                let gross = entry.gross();
                *gateway_total += gross;

                let currency_key = entry.currency.trim().to_ascii_uppercase();
                *by_currency.entry(currency_key).or_insert(0.0) += gross;
            }
        }

        Self {
            by_currency,
            by_gateway,
        }
    }

    /// Total gross for a currency; a currency with no observed entries
    /// reports zero.
    pub fn currency_total(&self, currency: Currency) -> f64 {
        self.currency_total_for_code(currency.code())
    }

    /// Total gross for an arbitrary currency code (case-insensitive).
    pub fn currency_total_for_code(&self, code: &str) -> f64 {
        self.by_currency
            .get(&code.trim().to_ascii_uppercase())
            .copied()
            .unwrap_or(0.0)
    }

    /// Total gross for a gateway; an absent gateway reports zero.
    pub fn gateway_total(&self, gateway: Gateway) -> f64 {
        self.by_gateway
            .get(gateway.as_str())
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of all per-currency totals (equals the per-gateway sum).
    pub fn grand_total(&self) -> f64 {
        self.by_currency.values().sum()
    }

    /// Observed (currency code, total) pairs in code order.
    pub fn currencies(&self) -> impl Iterator<Item = (&str, f64)> {
        self.by_currency.iter().map(|(code, total)| (code.as_str(), *total))
    }

    /// Observed (gateway name, total) pairs in name order.
    pub fn gateways(&self) -> impl Iterator<Item = (&str, f64)> {
        self.by_gateway.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
