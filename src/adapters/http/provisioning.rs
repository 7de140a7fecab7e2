//! HTTP implementation of the `ProvisioningClient` port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::provisioning::AccessGrantRequest;
use crate::ports::{ApiError, GrantReceipt, ProvisioningClient};

use super::client::ApiClient;

/// `ProvisioningClient` backed by the two override endpoints.
pub struct HttpProvisioningClient {
    client: Arc<ApiClient>,
}

impl HttpProvisioningClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProvisioningClient for HttpProvisioningClient {
    async fn grant_combined_access(
        &self,
        request: &AccessGrantRequest,
    ) -> Result<GrantReceipt, ApiError> {
        self.client
            .post_json("analytics/combined-access/", request)
            .await
    }

    async fn add_user_override(
        &self,
        request: &AccessGrantRequest,
    ) -> Result<GrantReceipt, ApiError> {
        self.client
            .post_json("analytics/admin/user_add/", request)
            .await
    }
}
