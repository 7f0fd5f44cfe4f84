//! Exact Integer Square Roots

use num_bigint::BigUint;
use num_integer::Roots;

/// Square root of `n` if `n` is a perfect square
///
/// `Roots::sqrt` gives `floor(√n)` in exact arithmetic, so the result is
/// correct at any magnitude. Returns `None` when `floor(√n)² != n`.
pub fn exact_isqrt(n: &BigUint) -> Option<BigUint> {
    let root = Roots::sqrt(n);
    if &root * &root == *n {
        Some(root)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_squares() {
        for k in 0u32..200 {
            let n = BigUint::from(k * k);
            assert_eq!(exact_isqrt(&n), Some(BigUint::from(k)));
        }
    }

    #[test]
    fn test_non_squares() {
        for n in [2u32, 3, 5, 8, 24, 26, 840, 842] {
            assert_eq!(exact_isqrt(&BigUint::from(n)), None);
        }
    }

    #[test]
    fn test_beyond_f64_precision() {
        // (2^60 + 1)^2 is not representable in an f64 mantissa
        let root = (BigUint::from(1u32) << 60u32) + 1u32;
        let square = &root * &root;
        assert_eq!(exact_isqrt(&square), Some(root));
        assert_eq!(exact_isqrt(&(square + 1u32)), None);
    }
}
