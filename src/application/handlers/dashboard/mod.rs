//! Dashboard page loaders.

mod load_financials;
mod load_infrastructure;
mod load_overview;
mod load_user_insights;

pub use load_financials::{FinancialsModel, LoadFinancialsHandler};
pub use load_infrastructure::{InfrastructureModel, LoadInfrastructureHandler};
pub use load_overview::{LoadOverviewHandler, OverviewModel};
pub use load_user_insights::{LoadUserInsightsHandler, UserInsightsModel};
