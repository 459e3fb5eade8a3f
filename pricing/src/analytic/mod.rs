pub mod black_scholes;

pub use black_scholes::{cdf, signed_value, BlackScholesMerton, OptionPrice};
