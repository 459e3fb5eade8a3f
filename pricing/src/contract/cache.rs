use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a cached number came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CacheState {
    /// Supplied by the caller; inputs unknown.
    Seeded,
    /// Computed by the contract for these market inputs.
    Fresh {
        price: f64,
        evaluation_date: NaiveDate,
    },
    /// Contract parameters changed after the value was stored.
    Stale,
}

/// A stored result together with its freshness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedResult {
    pub value: f64,
    pub state: CacheState,
}

impl CachedResult {
    pub fn seeded(value: f64) -> Self {
        Self {
            value,
            state: CacheState::Seeded,
        }
    }

    pub fn fresh(value: f64, price: f64, evaluation_date: NaiveDate) -> Self {
        Self {
            value,
            state: CacheState::Fresh {
                price,
                evaluation_date,
            },
        }
    }

    pub fn mark_stale(&mut self) {
        self.state = CacheState::Stale;
    }

    pub fn is_stale(&self) -> bool {
        self.state == CacheState::Stale
    }

    /// True only if the value was computed for exactly these inputs.
    pub fn is_fresh_for(&self, price: f64, evaluation_date: NaiveDate) -> bool {
        match self.state {
            CacheState::Fresh {
                price: p,
                evaluation_date: d,
            } => p == price && d == evaluation_date,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn fresh_only_for_matching_inputs() {
        let cached = CachedResult::fresh(1.5, 100.0, date());
        assert!(cached.is_fresh_for(100.0, date()));
        assert!(!cached.is_fresh_for(101.0, date()));
        assert!(!cached.is_fresh_for(100.0, date().succ_opt().unwrap()));
    }

    #[test]
    fn seeded_is_never_fresh() {
        let cached = CachedResult::seeded(2.0);
        assert!(!cached.is_fresh_for(100.0, date()));
        assert!(!cached.is_stale());
    }

    #[test]
    fn mark_stale_keeps_value() {
        let mut cached = CachedResult::fresh(1.5, 100.0, date());
        cached.mark_stale();
        assert!(cached.is_stale());
        assert_eq!(cached.value, 1.5);
        assert!(!cached.is_fresh_for(100.0, date()));
    }
}
