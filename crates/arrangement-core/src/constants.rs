//! Search Constants
//!
//! Fixed values of the √2 Pell search. The search state is seeded from the
//! first convergent of √2, and every arrangement it yields satisfies
//! `2·blue·(blue − 1) = total·(total − 1)`.

// =============================================================================
// PELL EQUATION
// =============================================================================

/// D in `r² − D·s² = ±1`
pub const DISCRIMINANT: u32 = 2;

/// First convergent of √2, `r₀ / s₀ = 1 / 1`
pub const PELL_SEED: (u32, u32) = (1, 1);

// =============================================================================
// SEARCH DEFAULTS
// =============================================================================

/// Lower bound of the canonical puzzle: first arrangement with over 10^12 discs
pub const DEFAULT_BOUND: u64 = 1_000_000_000_000;

/// The first arrangements produced by the search, as `(total, blue)`
///
/// The puzzle statement quotes (21, 15) and (120, 85); (4, 3) comes from
/// the seed convergent itself.
pub const KNOWN_ARRANGEMENTS: [(u64, u64); 7] = [
    (4, 3),
    (21, 15),
    (120, 85),
    (697, 493),
    (4060, 2871),
    (23661, 16731),
    (137904, 97513),
];

/// Answer to the canonical puzzle, `find_arrangement(DEFAULT_BOUND)`
pub const DEFAULT_BOUND_ARRANGEMENT: (u64, u64) = (1_070_379_110_497, 756_872_327_473);

// =============================================================================
// VERIFICATION FUNCTIONS
// =============================================================================

/// Check `2·blue·(blue − 1) == total·(total − 1)` on native integers
///
/// Works in `u128` so every value in [`KNOWN_ARRANGEMENTS`] and
/// [`DEFAULT_BOUND_ARRANGEMENT`] fits without overflow.
#[inline]
pub fn verify_known_arrangement(total: u64, blue: u64) -> bool {
    if blue == 0 || blue >= total {
        return false;
    }
    let (total, blue) = (total as u128, blue as u128);
    2 * blue * (blue - 1) == total * (total - 1)
}

/// Run the identity over every tabulated arrangement
pub fn verify_all() -> bool {
    KNOWN_ARRANGEMENTS
        .iter()
        .chain(std::iter::once(&DEFAULT_BOUND_ARRANGEMENT))
        .all(|&(total, blue)| verify_known_arrangement(total, blue))
}
