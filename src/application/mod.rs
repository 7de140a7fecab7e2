//! Application layer - orchestration between ports and the domain.
//!
//! Page loaders fan their reads out as settled batches with typed
//! per-section defaults; the grant workflow owns the console's one
//! write path; the session guard gates protected views.

mod guard;
pub mod handlers;

pub use guard::{GuardOutcome, SessionGuard};
pub use handlers::{
    AdminLogCache, FinancialsModel, GrantAccessWorkflow, GrantError, GrantOptions,
    InfrastructureModel, LoadAdminLogsHandler, LoadFinancialsHandler, LoadGrantOptionsHandler,
    LoadInfrastructureHandler, LoadOverviewHandler, LoadUserInsightsHandler, LoginHandler,
    LogoutHandler, OverrideEndpoint, OverviewModel, PageLoad, UserInsightsModel,
};
