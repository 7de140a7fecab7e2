//! Provisioning domain - manual access overrides.

mod options;
mod request;
mod state;

pub use options::{AdminLogEntry, SelectOption};
pub use request::{
    generate_transaction_id, AccessGrantRequest, DEFAULT_PAYMENT_STATUS, DEFAULT_STATUS,
    MANUAL_SUBSCRIPTION_ID,
};
pub use state::{InvalidTransition, SubmissionState};
