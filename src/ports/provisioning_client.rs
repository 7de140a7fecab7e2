//! Write-side port for manual overrides.
//!
//! The backend performs billing record, plan grant, and credit sync as
//! one atomic unit per request; the client has no visibility into
//! partial failure and treats any non-success response as "nothing
//! committed".

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::provisioning::AccessGrantRequest;

use super::ApiError;

/// Success acknowledgement from an override endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantReceipt {
    /// The backend's confirmation message.
    #[serde(default)]
    pub message: String,
}

/// Port over the two override endpoints. Both accept the grant
/// request shape.
#[async_trait]
pub trait ProvisioningClient: Send + Sync {
    /// Grants access, generates the invoice, and syncs credits.
    async fn grant_combined_access(
        &self,
        request: &AccessGrantRequest,
    ) -> Result<GrantReceipt, ApiError>;

    /// Provisions a user onto a plan through the admin endpoint.
    async fn add_user_override(
        &self,
        request: &AccessGrantRequest,
    ) -> Result<GrantReceipt, ApiError>;
}
