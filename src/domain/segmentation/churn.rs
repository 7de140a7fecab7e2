//! Churn candidate list normalization.
//!
//! The backend sometimes returns the churn list wrapped in a
//! one-element outer list. Decoding attempts the bare list first,
//! falls back to unwrapping exactly one level, and rejects anything
//! else rather than guessing further.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::ValidationError;

/// A user with a high historical streak but no recent activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurnCandidate {
    /// Backend identifies users by email in analytics rows.
    #[serde(rename = "user__email")]
    pub user_email: String,

    /// Highest engagement streak the user ever reached, in days.
    pub max_streak: u32,

    /// Last recorded interaction; absent or unparseable dates read as
    /// unknown and display as such.
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_interaction_date: Option<NaiveDate>,
}

/// Bare list or one-element list containing the list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChurnPayload {
    Flat(Vec<ChurnCandidate>),
    Wrapped(Vec<Vec<ChurnCandidate>>),
}

/// Normalizes the churn payload, unwrapping at most one nesting level.
///
/// `[[a, b]]` and `[a, b]` both yield `[a, b]`; `[[]]` and `[]` both
/// yield the empty list. A wrapper with more than one inner list is a
/// decode error.
pub fn normalize_churn_payload(
    value: serde_json::Value,
) -> Result<Vec<ChurnCandidate>, ValidationError> {
    let payload: ChurnPayload = serde_json::from_value(value)
        .map_err(|e| ValidationError::invalid_format("churn_risk", e.to_string()))?;

    match payload {
        ChurnPayload::Flat(candidates) => Ok(candidates),
        ChurnPayload::Wrapped(mut lists) => {
            if lists.len() == 1 {
                Ok(lists.remove(0))
            } else {
                Err(ValidationError::invalid_format(
                    "churn_risk",
                    format!("expected a single nested list, got {}", lists.len()),
                ))
            }
        }
    }
}

/// Accepts `YYYY-MM-DD`, a full ISO timestamp, or null; anything else
/// reads as unknown.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let date_part = s.get(..10).unwrap_or(&s);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }))
}

#[cfg(test)]
#[path = "churn_test.rs"]
mod churn_test;
