//! HTTP adapters for the analytics backend.

mod analytics;
mod auth;
mod client;
mod payloads;
mod provisioning;

pub use analytics::HttpAnalyticsReader;
pub use auth::HttpAuthProvider;
pub use client::ApiClient;
pub use provisioning::HttpProvisioningClient;
