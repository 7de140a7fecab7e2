//! LoadFinancialsHandler - the financial intelligence page.
//!
//! The chosen period is passed to both endpoints so the timeline and
//! the summary cards describe the same window.

use std::sync::Arc;

use futures::join;

use crate::domain::foundation::{Currency, Gateway, ReportingPeriod};
use crate::domain::revenue::{RevenueAggregate, RevenueBreakdown, SalesTrend};
use crate::ports::AnalyticsReader;

use super::super::page::{section, PageLoad};

/// Render-ready model for the financials page.
#[derive(Debug, Clone, Default)]
pub struct FinancialsModel {
    pub period: ReportingPeriod,

    /// Raw mapping, kept for per-gateway/per-currency card queries.
    pub breakdown: RevenueBreakdown,

    /// Reconciled totals for the same window.
    pub aggregate: RevenueAggregate,

    pub trend: SalesTrend,
}

impl FinancialsModel {
    /// Stripe gross across all currencies (international card).
    pub fn stripe_gross(&self) -> f64 {
        self.breakdown.gross_where(Some(Gateway::Stripe), None)
    }

    /// Razorpay INR gross (domestic card).
    pub fn razorpay_inr_gross(&self) -> f64 {
        self.breakdown
            .gross_where(Some(Gateway::Razorpay), Some(Currency::Inr))
    }

    /// Combined app-store gross for one currency.
    pub fn app_store_gross(&self, currency: Currency) -> f64 {
        self.breakdown.gross_where(Some(Gateway::Apple), Some(currency))
            + self.breakdown.gross_where(Some(Gateway::Google), Some(currency))
    }
}

/// Loads the financials page for a reporting period.
pub struct LoadFinancialsHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl LoadFinancialsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, period: ReportingPeriod) -> PageLoad<FinancialsModel> {
        let (trend, revenue) = join!(
            self.reader.sales_trend(period),
            self.reader.revenue(period),
        );

        let mut failed = Vec::new();
        let trend = section("sales_trend", trend, &mut failed);
        let breakdown = section("revenue", revenue, &mut failed);

        let model = FinancialsModel {
            period,
            aggregate: RevenueAggregate::reconcile(&breakdown),
            breakdown,
            trend,
        };

        PageLoad {
            model,
            section_count: 2,
            failed_sections: failed,
        }
    }
}
