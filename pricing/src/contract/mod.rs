//! Option contract types
//!
//! - OptionKind: put/call and the sign convention
//! - OptionContract: validated terms plus valuation
//! - CachedResult: stored theoretical value / delta with freshness
//! - ContractTerms: serialisable raw record

pub mod cache;
pub mod kind;
pub mod option;
pub mod terms;

pub use cache::{CacheState, CachedResult};
pub use kind::OptionKind;
pub use option::OptionContract;
pub use terms::ContractTerms;
