//! Picker options and the override audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `{value, label}` pair backing the user and plan pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One recorded override action from the admin log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLogEntry {
    pub id: i64,
    pub action: String,
    pub target: String,
    pub performed_at: DateTime<Utc>,
}
