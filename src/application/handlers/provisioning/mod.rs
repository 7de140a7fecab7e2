//! Provisioning handlers - the grant form and its one write path.

mod grant_access;
mod load_grant_options;

pub use grant_access::{GrantAccessWorkflow, GrantError, OverrideEndpoint};
pub use load_grant_options::{GrantOptions, LoadGrantOptionsHandler};
