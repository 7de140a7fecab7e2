//! Submission state machine for the access-grant workflow.
//!
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. Submit is the
//! only transition out of Idle, and only one submission may be in
//! flight at a time.

use serde::Serialize;
use thiserror::Error;

/// Where a grant submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Attempted transition the state machine does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {attempted} while {from:?}")]
pub struct InvalidTransition {
    pub from: SubmissionState,
    pub attempted: &'static str,
}

impl SubmissionState {
    /// Begins a submission. Only legal from Idle.
    pub fn begin(self) -> Result<SubmissionState, InvalidTransition> {
        match self {
            SubmissionState::Idle => Ok(SubmissionState::Submitting),
            other => Err(InvalidTransition {
                from: other,
                attempted: "begin a submission",
            }),
        }
    }

    /// Records the terminal outcome of an in-flight submission.
    pub fn complete(self, success: bool) -> Result<SubmissionState, InvalidTransition> {
        match self {
            SubmissionState::Submitting => Ok(if success {
                SubmissionState::Succeeded
            } else {
                SubmissionState::Failed
            }),
            other => Err(InvalidTransition {
                from: other,
                attempted: "complete a submission",
            }),
        }
    }

    /// Returns to Idle from either terminal outcome.
    pub fn acknowledge(self) -> SubmissionState {
        match self {
            SubmissionState::Succeeded | SubmissionState::Failed => SubmissionState::Idle,
            other => other,
        }
    }

    /// True while a submission is in flight; the submit control stays
    /// disabled for the duration.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}
