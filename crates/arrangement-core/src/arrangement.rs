//! Disc Arrangements
//!
//! A box of `total` discs, `blue` of them blue, is an arrangement when two
//! discs drawn without replacement are both blue with probability exactly
//! one half:
//!
//! ```text
//! (blue / total) · ((blue − 1) / (total − 1)) = 1/2
//! 2·blue·(blue − 1) = total·(total − 1)
//! blue = (1 + √(1 + 2·total·(total − 1))) / 2
//! ```
//!
//! The radicand equals `total² + (total − 1)²`, so `(total − 1, total)` are
//! the legs of a primitive Pythagorean triple. Those triples come from the
//! Pell solutions of `r² − 2s² = ±1`, and their longer legs grow strictly
//! with each solution. Walking the solutions forward therefore visits every
//! arrangement in increasing order, and the first one above a bound is the
//! smallest.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{FromPrimitive, One, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{ArrangementError, ArrangementResult};
use crate::isqrt::exact_isqrt;
use crate::pell::{verify_pell_solution, PellIter, PellSolution};
use crate::triple::PythagoreanTriple;

// =============================================================================
// BOUND
// =============================================================================

/// A validated lower bound: a positive integer
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(BigUint);

impl Bound {
    /// Validate a bound given as a big integer
    pub fn new(value: BigInt) -> ArrangementResult<Self> {
        match value.sign() {
            Sign::Plus => Ok(Self(value.magnitude().clone())),
            _ => Err(ArrangementError::invalid(format!(
                "bound must be a positive integer, got {}",
                value
            ))),
        }
    }

    /// The bound as an unsigned integer
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// First arrangement whose total strictly exceeds this bound
    pub fn find_arrangement(&self) -> Arrangement {
        debug!(bound = %self.0, "Searching for first arrangement above bound");

        let mut solution = PellSolution::seed();
        let mut iterations: u32 = 1;
        loop {
            let triple = PythagoreanTriple::from(&solution);
            if *triple.longer_leg() > self.0 {
                let arrangement = Arrangement::from_adjacent_legs(&triple);
                debug!(
                    total = %arrangement.total,
                    blue = %arrangement.blue,
                    iterations,
                    "Found arrangement"
                );
                return arrangement;
            }

            trace!(
                r = %solution.r,
                s = %solution.s,
                total = %triple.longer_leg(),
                "Candidate does not exceed bound"
            );
            solution = solution.next();
            iterations += 1;
        }
    }

    /// Arrangements whose total strictly exceeds this bound, smallest first
    pub fn arrangements_above(&self) -> impl Iterator<Item = Arrangement> + '_ {
        arrangements().skip_while(move |arrangement| arrangement.total <= self.0)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<BigInt> for Bound {
    type Error = ArrangementError;

    fn try_from(value: BigInt) -> ArrangementResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<BigUint> for Bound {
    type Error = ArrangementError;

    fn try_from(value: BigUint) -> ArrangementResult<Self> {
        Self::new(BigInt::from(value))
    }
}

impl TryFrom<i64> for Bound {
    type Error = ArrangementError;

    fn try_from(value: i64) -> ArrangementResult<Self> {
        Self::new(BigInt::from(value))
    }
}

impl TryFrom<u64> for Bound {
    type Error = ArrangementError;

    fn try_from(value: u64) -> ArrangementResult<Self> {
        Self::new(BigInt::from(value))
    }
}

impl TryFrom<f64> for Bound {
    type Error = ArrangementError;

    fn try_from(value: f64) -> ArrangementResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ArrangementError::invalid(format!(
                "bound must be an integer, got {}",
                value
            )));
        }
        let value = BigInt::from_f64(value).ok_or_else(|| {
            ArrangementError::invalid(format!("bound {} is not representable", value))
        })?;
        Self::new(value)
    }
}

impl FromStr for Bound {
    type Err = ArrangementError;

    fn from_str(s: &str) -> ArrangementResult<Self> {
        let trimmed = s.trim();
        let value: BigInt = trimmed.parse().map_err(|_| {
            ArrangementError::invalid(format!("expected a positive integer, got {:?}", trimmed))
        })?;
        Self::new(value)
    }
}

// =============================================================================
// ARRANGEMENT
// =============================================================================

/// A box of `total` discs with `blue` blue ones
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrangement {
    /// Total disc count (red + blue)
    #[serde(with = "decimal")]
    pub total: BigUint,
    /// Blue disc count
    #[serde(with = "decimal")]
    pub blue: BigUint,
}

impl Arrangement {
    pub fn new(total: impl Into<BigUint>, blue: impl Into<BigUint>) -> Self {
        Self {
            total: total.into(),
            blue: blue.into(),
        }
    }

    /// The arrangement for a triple whose legs are `total − 1` and `total`
    ///
    /// # Errors
    /// `InvalidArgument` if the legs are not adjacent integers or the
    /// result is not a valid arrangement.
    pub fn from_triple(triple: &PythagoreanTriple) -> ArrangementResult<Self> {
        if !triple.legs_differ_by_one() {
            return Err(ArrangementError::invalid(format!(
                "triple legs {} and {} do not differ by one",
                triple.a, triple.b
            )));
        }
        let arrangement = Self::from_adjacent_legs(triple);
        if !arrangement.is_valid() {
            return Err(ArrangementError::invalid(format!(
                "triple ({}, {}, {}) gives no arrangement",
                triple.a, triple.b, triple.c
            )));
        }
        Ok(arrangement)
    }

    // Legs must differ by one: then 1 + 2ab = a² + b² = c² and the root is exact.
    pub(crate) fn from_adjacent_legs(triple: &PythagoreanTriple) -> Self {
        let radicand = &triple.a * &triple.b * 2u32 + 1u32;
        let root = radicand.sqrt();

        Self {
            total: triple.longer_leg().clone(),
            blue: (root + 1u32) >> 1u32,
        }
    }

    /// The arrangement with exactly `total` discs, if one exists
    pub fn for_total(total: &BigUint) -> Option<Self> {
        if *total < BigUint::from(2u32) {
            return None;
        }
        let radicand = total * (total - 1u32) * 2u32 + 1u32;
        let root = exact_isqrt(&radicand)?;
        let arrangement = Self {
            total: total.clone(),
            blue: (root + 1u32) >> 1u32,
        };
        arrangement.is_valid().then_some(arrangement)
    }

    /// Red disc count
    pub fn red(&self) -> BigUint {
        if self.blue > self.total {
            return BigUint::zero();
        }
        &self.total - &self.blue
    }

    /// `0 < blue < total` and `2·blue·(blue − 1) == total·(total − 1)`
    pub fn is_valid(&self) -> bool {
        if self.blue.is_zero() || self.blue >= self.total {
            return false;
        }
        let one = BigUint::one();
        &self.blue * (&self.blue - &one) * 2u32 == &self.total * (&self.total - &one)
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} discs ({} blue, {} red)", self.total, self.blue, self.red())
    }
}

/// Big integers as decimal strings, so JSON consumers never lose precision
mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// SEQUENCE
// =============================================================================

/// Infinite iterator over all arrangements, in increasing order of total
///
/// Every new iterator restarts from the seed convergent.
#[derive(Debug, Clone, Default)]
pub struct ArrangementIter {
    solutions: PellIter,
}

impl ArrangementIter {
    pub fn new() -> Self {
        Self {
            solutions: PellIter::new(),
        }
    }
}

impl Iterator for ArrangementIter {
    type Item = Arrangement;

    fn next(&mut self) -> Option<Self::Item> {
        let solution = self.solutions.next()?;
        Some(Arrangement::from_adjacent_legs(&PythagoreanTriple::from(
            &solution,
        )))
    }
}

/// Create an iterator over all arrangements
pub fn arrangements() -> ArrangementIter {
    ArrangementIter::new()
}

/// The arrangement generated by one Pell solution
///
/// # Errors
/// `InvalidArgument` unless `r² − 2s² = ±1` with `s > 0`.
pub fn arrangement_from_solution(solution: &PellSolution) -> ArrangementResult<Arrangement> {
    if solution.s.is_zero() || !verify_pell_solution(solution) {
        return Err(ArrangementError::invalid(format!(
            "({}, {}) is not a solution of r² − 2s² = ±1 with s > 0",
            solution.r, solution.s
        )));
    }
    Arrangement::from_triple(&PythagoreanTriple::from(solution))
}

// =============================================================================
// SEARCH
// =============================================================================

/// First arrangement with more than `bound` discs in total
///
/// # Errors
/// `InvalidArgument` if `bound` is zero or negative. The search never
/// starts in that case.
pub fn find_arrangement(bound: &BigInt) -> ArrangementResult<Arrangement> {
    let bound = Bound::new(bound.clone())?;
    Ok(bound.find_arrangement())
}

/// The first `count` arrangements with more than `bound` discs in total
pub fn find_arrangements(bound: &BigInt, count: usize) -> ArrangementResult<Vec<Arrangement>> {
    let bound = Bound::new(bound.clone())?;
    Ok(bound.arrangements_above().take(count).collect())
}

// =============================================================================
// TESTS
// =============================================================================
