//! # Arrangement Core
//!
//! Finds the first box of red and blue discs, above a given size, for which
//! drawing two discs without replacement gives two blues with probability
//! exactly one half.
//!
//! ## Derivation
//!
//! ```text
//! P[BB] = 1/2           ⇔  2·x·(x − 1) = n·(n − 1)
//! 1 + 2n(n − 1) = z²    ⇔  (n − 1)² + n² = z²
//! legs from (p, q)      ⇒  (p − q)² − 2q² = ±1
//! r = p − q, s = q      ⇒  r² − 2s² = ±1, convergents of √2
//! ```
//!
//! Walking the convergents of √2 from `1/1` produces every arrangement in
//! increasing order, each step multiplying the total by roughly 5.8.
//!
//! ```
//! use arrangement_core::find_arrangement;
//! use num_bigint::{BigInt, BigUint};
//!
//! let found = find_arrangement(&BigInt::from(21)).unwrap();
//! assert_eq!(found.total, BigUint::from(120u32));
//! assert_eq!(found.blue, BigUint::from(85u32));
//! ```

pub mod arrangement;
pub mod constants;
pub mod isqrt;
pub mod pell;
pub mod triple;
mod errors;

pub use arrangement::*;
pub use constants::*;
pub use errors::*;
pub use isqrt::*;
pub use pell::*;
pub use triple::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::arrangement::*;
    pub use crate::constants::*;
    pub use crate::errors::*;
    pub use crate::pell::*;
    pub use crate::triple::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_constants_consistent() {
        assert!(verify_all());
    }

    #[test]
    fn test_search_reproduces_known_table() {
        for (i, &(total, blue)) in KNOWN_ARRANGEMENTS.iter().enumerate().skip(1) {
            let previous_total = KNOWN_ARRANGEMENTS[i - 1].0;
            let found = find_arrangement(&BigInt::from(previous_total)).unwrap();
            assert_eq!(found, Arrangement::new(total, blue));
        }
    }
}
