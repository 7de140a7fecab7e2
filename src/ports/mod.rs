//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - process-wide session token holder
//! - `Navigator` - forced-navigation sink (login redirect)
//! - `AuthProvider` - credential exchange
//! - `AnalyticsReader` - every analytics GET endpoint, typed
//! - `ProvisioningClient` - the two override POST endpoints
//! - `ApiError` - shared transport error taxonomy

mod analytics_reader;
mod api_error;
mod auth_provider;
mod navigator;
mod provisioning_client;
mod session_store;

pub use analytics_reader::AnalyticsReader;
pub use api_error::ApiError;
pub use auth_provider::{AuthError, AuthProvider, Credentials};
pub use navigator::Navigator;
pub use provisioning_client::{GrantReceipt, ProvisioningClient};
pub use session_store::SessionStore;
