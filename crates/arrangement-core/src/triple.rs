//! Pythagorean Triples
//!
//! Euclid's parametrization: for coprime `p > q > 0` of opposite parity,
//!
//! ```text
//! a = p² − q²
//! b = 2pq
//! c = p² + q²
//! ```
//!
//! is a primitive triple. A disc arrangement with `n` discs in total
//! exists exactly when `(n − 1, n, c)` is such a triple, so the legs must
//! differ by one.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{ArrangementError, ArrangementResult};
use crate::pell::PellSolution;

/// A Pythagorean triple `a² + b² = c²`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythagoreanTriple {
    /// `p² − q²`
    pub a: BigUint,
    /// `2pq`
    pub b: BigUint,
    /// `p² + q²`
    pub c: BigUint,
}

impl PythagoreanTriple {
    /// Build the triple for Euclid parameters `p > q > 0`
    pub fn from_euclid(p: &BigUint, q: &BigUint) -> ArrangementResult<Self> {
        if q.is_zero() || p <= q {
            return Err(ArrangementError::invalid(format!(
                "Euclid parameters need p > q > 0, got p={} q={}",
                p, q
            )));
        }

        Ok(Self::euclid(p, q))
    }

    // Callers guarantee p > q.
    fn euclid(p: &BigUint, q: &BigUint) -> Self {
        let p_sq = p * p;
        let q_sq = q * q;
        Self {
            a: &p_sq - &q_sq,
            b: p * q * 2u32,
            c: p_sq + q_sq,
        }
    }

    /// The longer of the two legs
    pub fn longer_leg(&self) -> &BigUint {
        if self.a > self.b {
            &self.a
        } else {
            &self.b
        }
    }

    /// `a² + b² == c²`
    pub fn is_right(&self) -> bool {
        &self.a * &self.a + &self.b * &self.b == &self.c * &self.c
    }

    /// `|a − b| == 1`
    pub fn legs_differ_by_one(&self) -> bool {
        let diff = if self.a > self.b {
            &self.a - &self.b
        } else {
            &self.b - &self.a
        };
        diff == BigUint::from(1u32)
    }
}

impl From<&PellSolution> for PythagoreanTriple {
    fn from(solution: &PellSolution) -> Self {
        let (p, q) = solution.triple_parameters();
        Self::euclid(&p, &q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(p: u32, q: u32) -> PythagoreanTriple {
        PythagoreanTriple::from_euclid(&BigUint::from(p), &BigUint::from(q)).unwrap()
    }

    #[test]
    fn test_three_four_five() {
        let t = triple(2, 1);
        assert_eq!(t.a, BigUint::from(3u32));
        assert_eq!(t.b, BigUint::from(4u32));
        assert_eq!(t.c, BigUint::from(5u32));
        assert!(t.is_right());
        assert!(t.legs_differ_by_one());
        assert_eq!(t.longer_leg(), &BigUint::from(4u32));
    }

    #[test]
    fn test_longer_leg_can_be_a() {
        // p=5, q=2: (21, 20, 29)
        let t = triple(5, 2);
        assert_eq!(t.longer_leg(), &BigUint::from(21u32));
        assert!(t.legs_differ_by_one());
    }

    #[test]
    fn test_legs_not_adjacent() {
        // p=3, q=2: (5, 12, 13)
        let t = triple(3, 2);
        assert!(t.is_right());
        assert!(!t.legs_differ_by_one());
    }

    #[test]
    fn test_pell_solutions_give_adjacent_legs() {
        for solution in crate::pell::pell_iter().take(30) {
            let t = PythagoreanTriple::from(&solution);
            assert!(t.is_right());
            assert!(t.legs_differ_by_one());
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let one = BigUint::from(1u32);
        let zero = BigUint::from(0u32);
        assert!(PythagoreanTriple::from_euclid(&one, &one).is_err());
        assert!(PythagoreanTriple::from_euclid(&one, &zero).is_err());
        assert!(PythagoreanTriple::from_euclid(&BigUint::from(2u32), &BigUint::from(3u32)).is_err());
    }
}
