//! Property-based tests for the arrangement search.
//!
//! Checks the probability identity, the strict bound and minimality
//! against a brute-force scan over small totals.

use arrangement_core::prelude::*;
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

/// Smallest total above `bound` admitting an arrangement, by direct scan
fn brute_force_total(bound: u64) -> u64 {
    (bound + 1..)
        .find(|&n| Arrangement::for_total(&BigUint::from(n)).is_some())
        .unwrap()
}

// =============================================================================
// Result Properties
// =============================================================================

proptest! {
    /// The result exceeds the bound and satisfies 2x(x-1) = n(n-1)
    #[test]
    fn prop_result_is_valid_and_above_bound(bound in 1i64..i64::MAX) {
        let found = find_arrangement(&BigInt::from(bound)).unwrap();
        prop_assert!(BigInt::from(found.total.clone()) > BigInt::from(bound));
        prop_assert!(found.is_valid());
        prop_assert!(found.blue > BigUint::from(0u32));
        prop_assert!(found.blue < found.total);
    }

    /// Repeated calls agree
    #[test]
    fn prop_idempotent(bound in 1u64..u64::MAX) {
        let bound = BigInt::from(bound);
        prop_assert_eq!(find_arrangement(&bound), find_arrangement(&bound));
    }

    /// Non-positive bounds never produce a result
    #[test]
    fn prop_non_positive_rejected(bound in i64::MIN..=0i64) {
        let result = find_arrangement(&BigInt::from(bound));
        prop_assert!(matches!(result, Err(ArrangementError::InvalidArgument(_))));
    }

    /// Fractional floats are rejected as bounds
    #[test]
    fn prop_fractional_rejected(whole in 0u32..1_000_000, frac in 0.01f64..0.99) {
        prop_assert!(Bound::try_from(whole as f64 + frac).is_err());
    }
}

// =============================================================================
// Minimality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Nothing between the bound and the result is an arrangement
    #[test]
    fn prop_minimal_against_brute_force(bound in 1u64..5_000) {
        let found = find_arrangement(&BigInt::from(bound)).unwrap();
        prop_assert_eq!(found.total, BigUint::from(brute_force_total(bound)));
    }
}

#[test]
fn test_brute_force_agrees_on_puzzle_values() {
    assert_eq!(brute_force_total(1), 4);
    assert_eq!(brute_force_total(4), 21);
    assert_eq!(brute_force_total(21), 120);
}

#[test]
fn test_sequence_is_strictly_increasing() {
    let totals: Vec<BigUint> = arrangements().take(60).map(|a| a.total).collect();
    for pair in totals.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_bound_string_round_trip() {
    let bound: Bound = "1000000000000".parse().unwrap();
    assert_eq!(bound.to_string(), "1000000000000");
    let found = bound.find_arrangement();
    let (total, blue) = DEFAULT_BOUND_ARRANGEMENT;
    assert_eq!(found, Arrangement::new(total, blue));
}

#[test]
fn test_json_uses_decimal_strings() {
    let arrangement = Arrangement::new(120u32, 85u32);
    let json = serde_json::to_string(&arrangement).unwrap();
    assert_eq!(json, r#"{"total":"120","blue":"85"}"#);
    let back: Arrangement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, arrangement);
}
