//! Revenue domain - reconciliation of gateway-keyed revenue payloads.

mod aggregate;
mod breakdown;
mod trend;

pub use aggregate::RevenueAggregate;
pub use breakdown::{GatewayRevenueEntry, RevenueBreakdown, RevenueMetrics};
pub use trend::{SalesPoint, SalesTrend};
