//! GrantAccessWorkflow - the console's one write path.
//!
//! Owns the operator's draft and the submission state machine. The
//! server performs billing record, plan grant, and credit sync as one
//! atomic unit; any non-success response means nothing committed.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::provisioning::{AccessGrantRequest, SubmissionState};
use crate::ports::{ApiError, GrantReceipt, ProvisioningClient};

use super::super::audit::AdminLogCache;

/// Which override endpoint a workflow submits to. Both accept the
/// same request shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideEndpoint {
    /// Grants access, generates the invoice, and syncs credits.
    CombinedAccess,

    /// The plain admin provisioning endpoint.
    UserAdd,
}

/// Failure of a grant submission.
#[derive(Debug, Error)]
pub enum GrantError {
    /// Client-side validation failed; no network call was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A submission is already in flight; the submit control should
    /// have been disabled.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// The backend rejected the grant; the message is the server's
    /// own. Nothing was committed.
    #[error("{0}")]
    Rejected(String),

    /// Transport failure with no server message. Nothing was
    /// committed.
    #[error(transparent)]
    Api(ApiError),
}

struct WorkflowInner {
    state: SubmissionState,
    draft: AccessGrantRequest,
}

/// The manual override workflow: draft editing, validation,
/// single-flight submission, and cache invalidation on success.
pub struct GrantAccessWorkflow {
    client: Arc<dyn ProvisioningClient>,
    log_cache: Arc<AdminLogCache>,
    endpoint: OverrideEndpoint,
    inner: Mutex<WorkflowInner>,
}

impl GrantAccessWorkflow {
    /// A workflow against the combined-access endpoint with a fresh
    /// draft.
    pub fn new(client: Arc<dyn ProvisioningClient>, log_cache: Arc<AdminLogCache>) -> Self {
        Self {
            client,
            log_cache,
            endpoint: OverrideEndpoint::CombinedAccess,
            inner: Mutex::new(WorkflowInner {
                state: SubmissionState::Idle,
                draft: AccessGrantRequest::fresh_defaults(),
            }),
        }
    }

    /// Redirects submissions to a different override endpoint.
    pub fn with_endpoint(mut self, endpoint: OverrideEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    fn lock(&self) -> MutexGuard<'_, WorkflowInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A copy of the operator's current draft, for form rendering.
    pub fn draft(&self) -> AccessGrantRequest {
        self.lock().draft.clone()
    }

    /// Applies an operator edit to the draft.
    pub fn edit_draft(&self, edit: impl FnOnce(&mut AccessGrantRequest)) {
        edit(&mut self.lock().draft);
    }

    /// True while a submission is in flight; the submit control must
    /// stay disabled.
    pub fn is_submitting(&self) -> bool {
        self.lock().state.is_submitting()
    }

    /// Submits the current draft.
    ///
    /// Validation runs first and blocks the network call entirely on
    /// failure. Success resets the draft to fresh defaults (new
    /// transaction id) and invalidates the admin log cache; failure
    /// leaves the draft intact for correction.
    pub async fn submit(&self) -> Result<GrantReceipt, GrantError> {
        let request = {
            let mut inner = self.lock();
            if inner.state.is_submitting() {
                return Err(GrantError::SubmissionInFlight);
            }
            // Fail fast: an invalid draft never reaches the wire and
            // the state machine stays Idle.
            inner.draft.validate()?;
            inner.state = inner
                .state
                .begin()
                .map_err(|_| GrantError::SubmissionInFlight)?;
            inner.draft.clone()
        };

        let result = match self.endpoint {
            OverrideEndpoint::CombinedAccess => self.client.grant_combined_access(&request).await,
            OverrideEndpoint::UserAdd => self.client.add_user_override(&request).await,
        };

        let mut inner = self.lock();
        match result {
            Ok(receipt) => {
                inner.state = Self::settle(inner.state, true);
                inner.draft = AccessGrantRequest::fresh_defaults();
                drop(inner);

                self.log_cache.invalidate();
                tracing::info!(
                    transaction_id = %request.transaction_id,
                    "manual access grant committed"
                );
                Ok(receipt)
            }
            Err(err) => {
                inner.state = Self::settle(inner.state, false);
                drop(inner);

                tracing::warn!(
                    transaction_id = %request.transaction_id,
                    error = %err,
                    "manual access grant rejected, nothing committed"
                );
                match err.server_message() {
                    Some(message) => Err(GrantError::Rejected(message)),
                    None => Err(GrantError::Api(err)),
                }
            }
        }
    }

    /// Both terminal outcomes return to Idle immediately; the draft
    /// carries the per-outcome difference.
    fn settle(state: SubmissionState, success: bool) -> SubmissionState {
        match state.complete(success) {
            Ok(outcome) => outcome.acknowledge(),
            Err(_) => SubmissionState::Idle,
        }
    }
}

#[cfg(test)]
#[path = "grant_access_test.rs"]
mod grant_access_test;
