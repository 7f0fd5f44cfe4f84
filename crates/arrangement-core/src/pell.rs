//! Pell Solutions for D = 2
//!
//! Integer solutions of `r² − 2s² = ±1` are the convergents `r/s` of √2:
//! 1/1, 3/2, 7/5, 17/12, 41/29, 99/70, ...
//!
//! - `r' = r + 2s`, `s' = r + s`, seeded at `(1, 1)`
//! - the sign of `r² − 2s²` alternates, starting at −1
//! - `s` runs through the Pell numbers, `r` through the companion Pell numbers
//!
//! Each solution fixes a pair of Euclid parameters `(p, q) = (r + s, s)`
//! whose Pythagorean triple has legs differing by exactly one.

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::constants::{DISCRIMINANT, PELL_SEED};

// =============================================================================
// SOLUTION
// =============================================================================

/// One solution `(r, s)` of `r² − 2s² = ±1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PellSolution {
    pub r: BigUint,
    pub s: BigUint,
}

impl PellSolution {
    /// The seed convergent `1/1`
    pub fn seed() -> Self {
        Self {
            r: BigUint::from(PELL_SEED.0),
            s: BigUint::from(PELL_SEED.1),
        }
    }

    /// `r² − 2s²`, which is ±1 for every solution reachable from the seed
    pub fn norm(&self) -> BigInt {
        let r_sq = BigInt::from(&self.r * &self.r);
        let ds_sq = BigInt::from(&self.s * &self.s * DISCRIMINANT);
        r_sq - ds_sq
    }

    /// Next convergent: `r' = r + 2s`, `s' = r + s`
    pub fn next(&self) -> Self {
        Self {
            r: &self.r + &self.s * DISCRIMINANT,
            s: &self.r + &self.s,
        }
    }

    /// Euclid parameters `(p, q) = (r + s, s)`
    ///
    /// `p > q > 0`, they are coprime and of opposite parity, so the triple
    /// they generate is primitive.
    pub fn triple_parameters(&self) -> (BigUint, BigUint) {
        (&self.r + &self.s, self.s.clone())
    }
}

impl Default for PellSolution {
    fn default() -> Self {
        Self::seed()
    }
}

/// Verify `r² − 2s² = ±1`
pub fn verify_pell_solution(solution: &PellSolution) -> bool {
    let norm = solution.norm();
    norm == BigInt::one() || norm == -BigInt::one()
}

// =============================================================================
// ITERATOR
// =============================================================================

/// Infinite iterator over the solutions, in increasing order
///
/// Every new iterator restarts from the seed.
#[derive(Debug, Clone)]
pub struct PellIter {
    current: PellSolution,
}

impl PellIter {
    pub fn new() -> Self {
        Self {
            current: PellSolution::seed(),
        }
    }
}

impl Default for PellIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PellIter {
    type Item = PellSolution;

    fn next(&mut self) -> Option<Self::Item> {
        let following = self.current.next();
        Some(std::mem::replace(&mut self.current, following))
    }
}

/// Create an iterator over Pell solutions
pub fn pell_iter() -> PellIter {
    PellIter::new()
}

// =============================================================================
// TESTS
// =============================================================================
