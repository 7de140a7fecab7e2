//! Access-grant request - the write-side entity of the console.
//!
//! Built fresh per submission attempt. The server treats the
//! transaction id as an idempotency/uniqueness key, so a request is
//! never reused across attempts: success regenerates the id, failure
//! leaves the draft for the operator to correct (including editing the
//! id before resubmitting).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{Currency, Gateway, ValidationError};

/// Subscription id marker for grants issued outside normal billing.
pub const MANUAL_SUBSCRIPTION_ID: &str = "MANUAL_BY_ADMIN";

/// Default subscription status for a manual grant.
pub const DEFAULT_STATUS: &str = "ACTIVE";

/// Default payment status for a manual grant.
pub const DEFAULT_PAYMENT_STATUS: &str = "SUCCESSFUL";

/// An administrative override granting a user plan access, billed
/// records, and synced credits as one server-side unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGrantRequest {
    /// Target user identifier (picker value).
    pub user: String,

    /// Plan identifier to grant.
    pub plan: String,

    pub gateway: Gateway,
    pub currency: Currency,

    pub total_amount: f64,
    pub tax_amount: f64,

    /// Unique per submission; regenerated on every fresh draft.
    pub transaction_id: String,

    pub pg_subscription_id: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub auto_renew: bool,
    pub in_effect: bool,

    pub status: String,
    pub payment_status: String,
}

impl AccessGrantRequest {
    /// A fresh draft: empty selections, zero amounts, a newly
    /// generated transaction id, and a 30-day window starting now.
    pub fn fresh_defaults() -> Self {
        let now = Utc::now();
        Self {
            user: String::new(),
            plan: String::new(),
            gateway: Gateway::Stripe,
            currency: Currency::Usd,
            total_amount: 0.0,
            tax_amount: 0.0,
            transaction_id: generate_transaction_id(),
            pg_subscription_id: MANUAL_SUBSCRIPTION_ID.to_string(),
            start_date: now,
            end_date: now + Duration::days(30),
            auto_renew: false,
            in_effect: true,
            status: DEFAULT_STATUS.to_string(),
            payment_status: DEFAULT_PAYMENT_STATUS.to_string(),
        }
    }

    /// Replaces the transaction id with a newly generated one.
    pub fn regenerate_transaction_id(&mut self) {
        self.transaction_id = generate_transaction_id();
    }

    /// Client-side validation, run before any network call.
    ///
    /// The first violation is returned; a failing draft must never
    /// reach the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user.trim().is_empty() {
            return Err(ValidationError::empty_field("user"));
        }
        if self.plan.trim().is_empty() {
            return Err(ValidationError::empty_field("plan"));
        }
        if self.transaction_id.trim().is_empty() {
            return Err(ValidationError::empty_field("transaction_id"));
        }
        if self.pg_subscription_id.trim().is_empty() {
            return Err(ValidationError::empty_field("pg_subscription_id"));
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(ValidationError::negative_amount(
                "total_amount",
                self.total_amount,
            ));
        }
        if !self.tax_amount.is_finite() || self.tax_amount < 0.0 {
            return Err(ValidationError::negative_amount(
                "tax_amount",
                self.tax_amount,
            ));
        }
        if self.start_date >= self.end_date {
            return Err(ValidationError::InvalidDateWindow {
                start: self.start_date.to_rfc3339(),
                end: self.end_date.to_rfc3339(),
            });
        }
        Ok(())
    }
}

/// Generates a `MAN-` prefixed transaction id unique per submission.
pub fn generate_transaction_id() -> String {
    let id = Uuid::new_v4().simple().to_string().to_ascii_uppercase();
    format!("MAN-{}", &id[..8])
}
