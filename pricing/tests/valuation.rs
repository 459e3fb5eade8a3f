use assert_approx_eq::assert_approx_eq;
use chrono::{Duration, NaiveDate};
use pricing::analytic::black_scholes::cdf;
use pricing::{OptionContract, OptionKind, PricingError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Zero-rate Black-Scholes put, written out independently of the crate.
fn reference_put(price: f64, strike: f64, time: f64, iv: f64) -> f64 {
    let d1 = ((price / strike).ln() + 0.5 * iv * iv * time) / (iv * time.sqrt());
    let d2 = d1 - iv * time.sqrt();
    strike * cdf(-d2) - price * cdf(-d1)
}

#[test]
fn kind_text_is_case_insensitive() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for word in ["put", "call"] {
        for _ in 0..20 {
            let mixed: String = word
                .chars()
                .map(|c| {
                    if rng.gen_bool(0.5) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            let contract = OptionContract::new("SPY", &mixed, 100.0, "2024-01-19").unwrap();
            let expected = if word == "put" { 1.0 } else { -1.0 };
            assert_eq!(contract.kind_sign(), expected, "kind text {mixed}");
        }
    }
    assert!(matches!(
        OptionContract::new("SPY", "butterfly", 100.0, "2024-01-19"),
        Err(PricingError::InvalidArgument(_))
    ));
}

#[test]
fn strike_sign_decides_construction() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let strikes = Uniform::new(-1_000.0, 1_000.0);
    for _ in 0..500 {
        let strike: f64 = strikes.sample(&mut rng);
        let result = OptionContract::new("SPY", "put", strike, "2024-01-19");
        if strike > 0.0 {
            assert!(result.is_ok(), "strike {strike}");
        } else {
            assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
        }
    }
    assert!(OptionContract::new("SPY", "put", 0.0, "2024-01-19").is_err());
}

#[test]
fn date_and_text_expirations_are_equal() {
    let from_date = OptionContract::new("SPY", "call", 50.0, ymd(2024, 6, 1)).unwrap();
    let from_text = OptionContract::new("SPY", "call", 50.0, "2024-06-01").unwrap();
    assert_eq!(from_date.expiration(), from_text.expiration());
    assert_eq!(from_date, from_text);
}

#[test]
fn unparseable_expiration_is_an_invalid_argument() {
    let err = OptionContract::new("SPY", "put", 100.0, "not-a-date").unwrap_err();
    assert!(matches!(err, PricingError::InvalidArgument(_)));
}

#[test]
fn evaluation_on_expiration_day_is_live() {
    let contract = OptionContract::new("SPY", "call", 100.0, "2024-01-19").unwrap();
    assert_eq!(contract.days_remaining("2024-01-19").unwrap(), 1);

    let value = contract.valuate(100.0, "2024-01-19").unwrap();
    let expected = reference_put(100.0, 100.0, 1.0 / 365.0, 0.2);
    assert_approx_eq!(value, expected, 1e-9);
    // at the money: an expired contract would be worth exactly 0
    assert!(value > 0.0);
}

#[test]
fn day_after_expiration_is_expired() {
    let contract = OptionContract::new("SPY", "put", 100.0, "2024-01-19")
        .unwrap()
        .with_implied_volatility(0.2);
    assert_eq!(contract.days_remaining("2024-01-20").unwrap(), 0);
    assert_eq!(contract.valuate(100.0, "2024-01-20").unwrap(), 0.0);
    assert_eq!(contract.valuate(90.0, "2024-01-20").unwrap(), -10.0);
}

#[test]
fn live_call_matches_reference_calculator() {
    let contract = OptionContract::new("SPY", "call", 50.0, "2024-06-01")
        .unwrap()
        .with_implied_volatility(0.25);
    let value = contract.valuate(100.0, "2024-01-01").unwrap();

    // 152 calendar days plus the expiration day
    let time = 153.0 / 365.0;
    assert_eq!(contract.days_remaining("2024-01-01").unwrap(), 153);
    assert_approx_eq!(contract.year_fraction("2024-01-01").unwrap(), time, 1e-15);
    assert_approx_eq!(value, reference_put(100.0, 50.0, time, 0.25), 1e-9);
    // erf-based zero-rate put, computed outside this crate
    assert_approx_eq!(value, 2.248076687860756e-5, 1e-9);
}

#[test]
fn zero_volatility_on_live_contract_is_a_domain_error() {
    let contract = OptionContract::new("SPY", "call", 50.0, "2024-06-01")
        .unwrap()
        .with_implied_volatility(0.0);
    let result = contract.valuate(100.0, "2024-01-01");
    assert!(matches!(result, Err(PricingError::NumericDomain(_))));
}

#[test]
fn non_positive_price_on_live_contract_is_a_domain_error() {
    let contract = OptionContract::new("SPY", "put", 50.0, "2024-06-01").unwrap();
    assert!(matches!(
        contract.valuate(0.0, "2024-01-01"),
        Err(PricingError::NumericDomain(_))
    ));
    // the expired branch never looks at the formula
    assert_eq!(contract.valuate(0.0, "2024-07-01").unwrap(), -50.0);
}

#[test]
fn expired_branch_never_exceeds_zero() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let levels = Uniform::new(1.0, 500.0);
    let expiry = ymd(2024, 3, 15);
    for _ in 0..500 {
        let strike = levels.sample(&mut rng);
        let price = levels.sample(&mut rng);
        let days_past = rng.gen_range(1..400);
        let evaluation_date = expiry + Duration::days(days_past);
        for kind in ["put", "call"] {
            let contract = OptionContract::new("SPY", kind, strike, expiry).unwrap();
            let value = contract.valuate(price, evaluation_date).unwrap();
            let intrinsic = match contract.kind() {
                OptionKind::Put => (strike - price).max(0.0),
                OptionKind::Call => (price - strike).max(0.0),
            };
            assert_eq!(value, -intrinsic);
        }
    }
}

#[test]
fn live_put_minus_call_is_forward_moneyness() {
    // zero-rate parity: the put is valued as a call and the call as a put
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let levels = Uniform::new(10.0, 300.0);
    let vols = Uniform::new(0.05, 1.0);
    for _ in 0..200 {
        let strike = levels.sample(&mut rng);
        let price = levels.sample(&mut rng);
        let iv = vols.sample(&mut rng);
        let put = OptionContract::new("SPY", "put", strike, "2025-01-17")
            .unwrap()
            .with_implied_volatility(iv);
        let call = OptionContract::new("SPY", "call", strike, "2025-01-17")
            .unwrap()
            .with_implied_volatility(iv);
        let difference =
            put.valuate(price, "2024-05-01").unwrap() - call.valuate(price, "2024-05-01").unwrap();
        assert_approx_eq!(difference, price - strike, 1e-8);
    }
}

#[test]
fn distinct_contracts_value_concurrently() {
    let contracts: Vec<OptionContract> = (1..=8)
        .map(|i| OptionContract::new("SPY", "call", 90.0 + i as f64, "2024-12-20").unwrap())
        .collect();
    let serial: Vec<f64> = contracts
        .iter()
        .map(|c| c.valuate(100.0, "2024-06-03").unwrap())
        .collect();

    let parallel: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = contracts
            .iter()
            .map(|c| scope.spawn(move || c.valuate(100.0, "2024-06-03").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
}
