//! Compile-time evaluation helpers.
//!
//! Everything in this module is evaluated before the program starts when
//! invoked from a const context; the results are baked into the binary as
//! constants. [`checked_non_negative`] is the one runtime entry point, for
//! call sites whose argument is not a compile-time constant.

use crate::error::{Error, Result};

/// Number of entries in [`SQUARES_TABLE`].
pub const SQUARES_TABLE_LEN: usize = 5;

/// Squares of `0..SQUARES_TABLE_LEN`, generated at compile time.
pub const SQUARES_TABLE: [i64; SQUARES_TABLE_LEN] = squares_table();

pub const fn square(x: i64) -> i64 {
    x * x
}

/// Generate a lookup table where entry `i` is `square(i)`.
pub const fn squares_table<const N: usize>() -> [i64; N] {
    let mut table = [0i64; N];
    let mut i = 0;
    while i < N {
        table[i] = square(i as i64);
        i += 1;
    }
    table
}

/// Return `x` unchanged if it is non-negative.
///
/// In a const context a negative argument aborts const evaluation, so the
/// program fails to build instead of failing at runtime. Zero is valid.
///
/// ```
/// const SAFE: i64 = ct_core::consteval::non_negative(10);
/// assert_eq!(SAFE, 10);
/// ```
///
/// A negative compile-time argument is rejected before a runnable program
/// exists:
///
/// ```compile_fail
/// const BAD: i64 = ct_core::consteval::non_negative(-1);
/// assert_eq!(BAD, -1);
/// ```
pub const fn non_negative(x: i64) -> i64 {
    assert!(x >= 0, "negative value not allowed");
    x
}

/// Runtime-checked counterpart of [`non_negative`] for arguments that are
/// not compile-time constants. Rejection surfaces as
/// [`Error::InvalidArgument`] rather than a build failure.
pub fn checked_non_negative(x: i64) -> Result<i64> {
    if x < 0 {
        return Err(Error::InvalidArgument(format!(
            "negative value not allowed: {}",
            x
        )));
    }
    Ok(x)
}
