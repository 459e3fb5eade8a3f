//! Valuation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// Market-assumption defaults applied when a contract is constructed.
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `default_implied_volatility` | 0.20 | iv used when none is supplied |
/// | `day_count_basis` | 365.0 | days per year for the year fraction |
///
/// The implied volatility fed into the pricing formula must be finite and
/// positive. That range is enforced when a live contract is valuated, not
/// here: a contract may carry any volatility until it is priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub default_implied_volatility: f64,
    pub day_count_basis: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_implied_volatility: 0.20,
            day_count_basis: 365.0,
        }
    }
}

impl ValuationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_implied_volatility(mut self, iv: f64) -> Self {
        self.default_implied_volatility = iv;
        self
    }

    pub fn with_day_count_basis(mut self, days: f64) -> Self {
        self.day_count_basis = days;
        self
    }

    pub fn validate(&self) -> PricingResult<()> {
        if !self.default_implied_volatility.is_finite() {
            return Err(PricingError::invalid_config(
                "default_implied_volatility must be finite",
            ));
        }
        if !self.day_count_basis.is_finite() || self.day_count_basis <= 0.0 {
            return Err(PricingError::invalid_config(
                "day_count_basis must be positive",
            ));
        }
        Ok(())
    }

    /// Parses a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> PricingResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|err| PricingError::invalid_config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
