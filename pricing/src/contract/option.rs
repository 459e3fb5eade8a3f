//! Option contract definition and valuation.
//!
//! An [`OptionContract`] holds validated static terms (underlying, kind,
//! strike, expiration) plus the market assumptions used to price it. Pricing
//! is a pure function of the underlying price and the evaluation date.

use chrono::NaiveDate;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analytic::black_scholes::signed_value;
use crate::common::config::ValuationConfig;
use crate::common::dates::{days_inclusive, DateInput};
use crate::common::models::DerivativeParameter;
use crate::contract::cache::CachedResult;
use crate::contract::kind::OptionKind;
use crate::contract::terms::ContractTerms;
use crate::error::{PricingError, PricingResult};

/// European option contract valued with a zero-rate closed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ContractTerms", into = "ContractTerms")]
pub struct OptionContract {
    underlying: String,
    kind: OptionKind,
    strike: f64,
    expiration: NaiveDate,
    implied_volatility: f64,
    interest_rate: f64,
    config: ValuationConfig,
    theoretical_value: Option<CachedResult>,
    delta: Option<CachedResult>,
}

impl OptionContract {
    /// Create a contract with the default [`ValuationConfig`].
    ///
    /// `kind` is matched case-insensitively against "put" and "call";
    /// `expiration` is a `NaiveDate` or `YYYY-MM-DD` text.
    pub fn new(
        underlying: impl Into<String>,
        kind: &str,
        strike: f64,
        expiration: impl DateInput,
    ) -> PricingResult<Self> {
        Self::with_config(
            underlying,
            kind,
            strike,
            expiration,
            ValuationConfig::default(),
        )
    }

    pub fn with_config(
        underlying: impl Into<String>,
        kind: &str,
        strike: f64,
        expiration: impl DateInput,
        config: ValuationConfig,
    ) -> PricingResult<Self> {
        config.validate()?;

        let underlying = underlying.into();
        if underlying.trim().is_empty() {
            return Err(PricingError::invalid_argument(
                "underlying must be a non-empty identifier",
            ));
        }

        let kind: OptionKind = kind.parse()?;

        if strike.is_nan() || strike <= 0.0 {
            return Err(PricingError::invalid_argument(format!(
                "strike must be positive, got {strike}"
            )));
        }

        let expiration = expiration.into_date()?;

        debug!(%underlying, %kind, strike, %expiration, "option contract created");

        Ok(Self {
            underlying,
            kind,
            strike,
            expiration,
            implied_volatility: config.default_implied_volatility,
            interest_rate: 0.0,
            config,
            theoretical_value: None,
            delta: None,
        })
    }

    pub fn with_implied_volatility(mut self, iv: f64) -> Self {
        self.implied_volatility = iv;
        self
    }

    pub fn with_theoretical_value(mut self, value: f64) -> Self {
        self.theoretical_value = Some(CachedResult::seeded(value));
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(CachedResult::seeded(delta));
        self
    }

    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn kind_sign(&self) -> f64 {
        self.kind.sign()
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Always zero; the valuation carries no discounting.
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    pub fn theoretical_value(&self) -> Option<&CachedResult> {
        self.theoretical_value.as_ref()
    }

    pub fn delta(&self) -> Option<&CachedResult> {
        self.delta.as_ref()
    }

    fn days_until_expiration(&self, evaluation_date: NaiveDate) -> i64 {
        days_inclusive(evaluation_date, self.expiration)
    }

    /// Days of value left, counting the expiration day itself.
    pub fn days_remaining(&self, evaluation_date: impl DateInput) -> PricingResult<i64> {
        Ok(self.days_until_expiration(evaluation_date.into_date()?))
    }

    /// Remaining life in years, zero once expired.
    pub fn year_fraction(&self, evaluation_date: impl DateInput) -> PricingResult<f64> {
        let days = self.days_remaining(evaluation_date)?;
        Ok(days.max(0) as f64 / self.config.day_count_basis)
    }

    pub fn is_expired(&self, evaluation_date: impl DateInput) -> PricingResult<bool> {
        Ok(self.days_remaining(evaluation_date)? <= 0)
    }

    /// Theoretical value of the contract at `price` on `evaluation_date`.
    ///
    /// Once no days remain the contract is worth its expired payoff (see
    /// [`OptionKind::expired_payoff`]). Otherwise the value is
    ///
    /// ```text
    /// d1    = (ln(S / K) + iv^2 / 2 * t) / (iv * sqrt(t))
    /// d2    = d1 - iv * sqrt(t)
    /// value = s * S * Φ(s * d1) - s * K * Φ(s * d2)
    /// ```
    ///
    /// with `s` the kind sign and `t` the year fraction. A live contract with
    /// a non-positive price or volatility fails with
    /// [`PricingError::NumericDomain`]; a non-finite price fails on either
    /// branch.
    ///
    /// The stored theoretical value is not touched; use
    /// [`OptionContract::refresh_theoretical_value`] for that.
    pub fn valuate(&self, price: f64, evaluation_date: impl DateInput) -> PricingResult<f64> {
        let evaluation_date = evaluation_date.into_date()?;
        let days_remaining = self.days_until_expiration(evaluation_date);

        if days_remaining <= 0 {
            if !price.is_finite() {
                warn!(underlying = %self.underlying, price, "expired valuation rejected");
                return Err(PricingError::numeric_domain(format!(
                    "underlying price must be finite, got {price}"
                )));
            }
            let payoff = self.kind.expired_payoff(self.strike, price);
            debug!(%evaluation_date, days_remaining, payoff, "expired contract valued at payoff");
            return Ok(payoff);
        }

        let time = days_remaining as f64 / self.config.day_count_basis;
        debug!(%evaluation_date, days_remaining, time, "valuing live contract");

        let params = DerivativeParameter::new(
            price,
            self.strike,
            time,
            self.interest_rate,
            self.implied_volatility,
        );
        signed_value(&params, self.kind.sign()).map_err(|err| {
            warn!(underlying = %self.underlying, %err, "valuation rejected");
            err
        })
    }

    /// Values the contract across a ladder of underlying prices on one date.
    pub fn valuate_ladder(
        &self,
        prices: ArrayView1<f64>,
        evaluation_date: impl DateInput,
    ) -> PricingResult<Array1<f64>> {
        let evaluation_date = evaluation_date.into_date()?;
        let mut values = Array1::zeros(prices.len());
        for (value, &price) in values.iter_mut().zip(prices.iter()) {
            *value = self.valuate(price, evaluation_date)?;
        }
        Ok(values)
    }

    /// Values the contract and stores the result as a fresh theoretical value.
    pub fn refresh_theoretical_value(
        &mut self,
        price: f64,
        evaluation_date: impl DateInput,
    ) -> PricingResult<f64> {
        let evaluation_date = evaluation_date.into_date()?;
        let value = self.valuate(price, evaluation_date)?;
        self.theoretical_value = Some(CachedResult::fresh(value, price, evaluation_date));
        Ok(value)
    }

    pub fn set_theoretical_value(&mut self, value: f64) {
        self.theoretical_value = Some(CachedResult::seeded(value));
    }

    pub fn set_delta(&mut self, delta: f64) {
        self.delta = Some(CachedResult::seeded(delta));
    }

    /// Replaces the implied volatility; cached results become stale.
    pub fn set_implied_volatility(&mut self, iv: f64) {
        self.implied_volatility = iv;
        self.invalidate_cache();
    }

    pub fn invalidate_cache(&mut self) {
        for cached in [&mut self.theoretical_value, &mut self.delta]
            .into_iter()
            .flatten()
        {
            cached.mark_stale();
        }
    }
}
