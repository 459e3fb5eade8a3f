//! Option contract valuation.
//!
//! An [`OptionContract`] stores a put or call's terms (underlying, strike,
//! expiration) with its implied volatility and values it with the
//! zero-rate Black-Scholes closed form while days remain, or at its expired
//! payoff afterwards.
//!
//! ```rust
//! use pricing::OptionContract;
//!
//! let call = OptionContract::new("SPY", "call", 50.0, "2024-06-01")
//!     .unwrap()
//!     .with_implied_volatility(0.25);
//! let value = call.valuate(100.0, "2024-01-01").unwrap();
//! assert!((value - 2.248076687860756e-5).abs() < 1e-9);
//! ```
//!
//! Values follow the contract's sign convention: while days remain a put is
//! valued at the textbook call price and a call at the textbook put price;
//! expired contracts are valued at their negated intrinsic value.

pub mod analytic;
pub mod common;
pub mod contract;
pub mod error;

pub use crate::common::{DateInput, ValuationConfig};
pub use crate::contract::{CacheState, CachedResult, ContractTerms, OptionContract, OptionKind};
pub use crate::error::{PricingError, PricingResult};
