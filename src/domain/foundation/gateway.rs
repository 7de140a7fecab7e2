//! Payment gateway value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// An external payment processor the backend reports revenue for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gateway {
    Stripe,
    Razorpay,
    Google,
    Apple,
}

impl Gateway {
    /// All gateways, in reporting order.
    pub const ALL: [Gateway; 4] = [
        Gateway::Stripe,
        Gateway::Razorpay,
        Gateway::Google,
        Gateway::Apple,
    ];

    /// The uppercase wire name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::Stripe => "STRIPE",
            Gateway::Razorpay => "RAZORPAY",
            Gateway::Google => "GOOGLE",
            Gateway::Apple => "APPLE",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gateway {
    type Err = ValidationError;

    /// Parses a gateway name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STRIPE" => Ok(Gateway::Stripe),
            "RAZORPAY" => Ok(Gateway::Razorpay),
            "GOOGLE" => Ok(Gateway::Google),
            "APPLE" => Ok(Gateway::Apple),
            _ => Err(ValidationError::unknown_variant("gateway", s)),
        }
    }
}
