//! Application handlers, grouped by console area.

pub mod audit;
pub mod dashboard;
mod page;
pub mod provisioning;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use audit::{AdminLogCache, LoadAdminLogsHandler};
pub use dashboard::{
    FinancialsModel, InfrastructureModel, LoadFinancialsHandler, LoadInfrastructureHandler,
    LoadOverviewHandler, LoadUserInsightsHandler, OverviewModel, UserInsightsModel,
};
pub use page::PageLoad;
pub use provisioning::{
    GrantAccessWorkflow, GrantError, GrantOptions, LoadGrantOptionsHandler, OverrideEndpoint,
};
pub use session::{LoginHandler, LogoutHandler};
