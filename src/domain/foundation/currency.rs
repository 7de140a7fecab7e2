//! Currency value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A settlement currency the backend reports gross volume in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Inr,
}

impl Currency {
    /// All currencies, in reporting order.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Inr];

    /// The uppercase ISO code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    /// Case-insensitive comparison against a wire code.
    ///
    /// Source payloads are not consistently cased ("usd" vs "USD").
    pub fn matches_code(&self, code: &str) -> bool {
        code.trim().eq_ignore_ascii_case(self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    /// Parses a currency code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "INR" => Ok(Currency::Inr),
            _ => Err(ValidationError::unknown_variant("currency", s)),
        }
    }
}
