use crate::common::models::DerivativeParameter;
use crate::error::PricingResult;
use probability::distribution::{Distribution, Gaussian};

/// Standard normal cumulative distribution function Φ.
pub fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// d1 and d2 of the Black-Scholes-Merton formula.
pub fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
    let sigma_exp = dp.sigma_exp();
    let d1 = ((dp.asset_price / dp.strike).ln()
        + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
        / sigma_exp;
    (d1, d1 - sigma_exp)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = d1_d2(dp);
        cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = d1_d2(dp);
        cdf(-d2) * dp.strike * (-dp.rfr * dp.time_to_expiration).exp() - cdf(-d1) * dp.asset_price
    }
}

/// Sign-unified closed form used by option contracts:
///
/// `sign * S * Φ(sign * d1) - sign * K * e^(-rT) * Φ(sign * d2)`
///
/// With `sign = +1` this is the textbook call price, with `sign = -1` the
/// textbook put price. Fails with a numeric-domain error instead of
/// returning NaN or infinity.
pub fn signed_value(dp: &DerivativeParameter, sign: f64) -> PricingResult<f64> {
    dp.check_domain()?;
    let (d1, d2) = d1_d2(dp);
    tracing::trace!(d1, d2, sign, "closed-form intermediates");
    let discounted_strike = dp.strike * (-dp.rfr * dp.time_to_expiration).exp();
    Ok(sign * dp.asset_price * cdf(sign * d1) - sign * discounted_strike * cdf(sign * d2))
}
