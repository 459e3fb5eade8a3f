use crate::error::{PricingError, PricingResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Parameters with the risk-free rate fixed at zero.
    pub fn zero_rate(asset_price: f64, strike: f64, time_to_expiration: f64, vola: f64) -> Self {
        Self::new(asset_price, strike, time_to_expiration, 0.0, vola)
    }

    /// `vola * sqrt(T - t)`, the denominator of d1.
    pub fn sigma_exp(&self) -> f64 {
        self.vola * self.time_to_expiration.sqrt()
    }

    /// Rejects parameters for which `ln(S / K)` or the division by
    /// `vola * sqrt(T - t)` is undefined.
    pub fn check_domain(&self) -> PricingResult<()> {
        if !self.vola.is_finite() || self.vola <= 0.0 {
            return Err(PricingError::numeric_domain(format!(
                "implied volatility must be finite and positive, got {}",
                self.vola
            )));
        }
        if !self.asset_price.is_finite() || self.asset_price <= 0.0 {
            return Err(PricingError::numeric_domain(format!(
                "underlying price must be finite and positive, got {}",
                self.asset_price
            )));
        }
        if !self.time_to_expiration.is_finite() || self.time_to_expiration <= 0.0 {
            return Err(PricingError::numeric_domain(format!(
                "time to expiration must be positive, got {}",
                self.time_to_expiration
            )));
        }
        Ok(())
    }
}
