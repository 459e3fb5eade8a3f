pub mod config;
pub mod dates;
pub mod models;

pub use config::ValuationConfig;
pub use dates::{parse_iso_date, DateInput};
pub use models::DerivativeParameter;
