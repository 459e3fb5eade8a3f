use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Option kind (Put or Call)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Put,
    Call,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Put => "put",
            OptionKind::Call => "call",
        }
    }

    /// Book-keeping sign: +1 for put, -1 for call.
    ///
    /// This is the short-option convention the contract valuation is written
    /// in; it is the opposite of the usual payoff direction.
    pub fn sign(&self) -> f64 {
        match self {
            OptionKind::Put => 1.0,
            OptionKind::Call => -1.0,
        }
    }

    /// Value of a contract that can no longer carry time value.
    ///
    /// Zero when out of the money, otherwise the *negated* intrinsic value
    /// (`price - strike` for a put, `strike - price` for a call), in line
    /// with [`OptionKind::sign`]. A NaN price yields NaN; callers check
    /// finiteness first.
    pub fn expired_payoff(&self, strike: f64, price: f64) -> f64 {
        match self {
            OptionKind::Put => {
                if strike <= price {
                    0.0
                } else {
                    price - strike
                }
            }
            OptionKind::Call => {
                if strike >= price {
                    0.0
                } else {
                    strike - price
                }
            }
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "put" => Ok(OptionKind::Put),
            "call" => Ok(OptionKind::Call),
            _ => Err(PricingError::invalid_argument(format!(
                "option kind must be either 'put' or 'call', got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
