use serde::{Deserialize, Serialize};

use crate::common::config::ValuationConfig;
use crate::common::dates::ISO_DATE_FORMAT;
use crate::contract::option::OptionContract;
use crate::error::PricingError;

/// Unvalidated contract record, as read from or written to a data file.
///
/// Converting into an [`OptionContract`] runs the same validation as
/// [`OptionContract::with_config`]. Cache freshness is not part of the
/// record: stored results come back as seeded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub underlying: String,
    pub kind: String,
    pub strike: f64,
    /// ISO-8601 date text
    pub expiration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implied_volatility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theoretical_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default)]
    pub config: ValuationConfig,
}

impl TryFrom<ContractTerms> for OptionContract {
    type Error = PricingError;

    fn try_from(terms: ContractTerms) -> Result<Self, Self::Error> {
        let mut contract = OptionContract::with_config(
            terms.underlying,
            &terms.kind,
            terms.strike,
            terms.expiration,
            terms.config,
        )?;
        if let Some(iv) = terms.implied_volatility {
            contract = contract.with_implied_volatility(iv);
        }
        if let Some(value) = terms.theoretical_value {
            contract = contract.with_theoretical_value(value);
        }
        if let Some(delta) = terms.delta {
            contract = contract.with_delta(delta);
        }
        Ok(contract)
    }
}

impl From<OptionContract> for ContractTerms {
    fn from(contract: OptionContract) -> Self {
        Self {
            underlying: contract.underlying().to_string(),
            kind: contract.kind().as_str().to_string(),
            strike: contract.strike(),
            expiration: contract.expiration().format(ISO_DATE_FORMAT).to_string(),
            implied_volatility: Some(contract.implied_volatility()),
            theoretical_value: contract.theoretical_value().map(|cached| cached.value),
            delta: contract.delta().map(|cached| cached.value),
            config: *contract.config(),
        }
    }
}
