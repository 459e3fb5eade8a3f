use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Malformed or out-of-domain contract or valuation input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Inputs for which the closed-form formula is undefined.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn numeric_domain(msg: impl Into<String>) -> Self {
        Self::NumericDomain(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
