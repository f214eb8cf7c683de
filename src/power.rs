//! Integer exponentiation by squaring (square-and-multiply).
//!
//! `a^b` takes `O(log b)` multiplications instead of `O(b)`: write `b` in binary, e.g.
//! `10 = 0b1010`, then `2^10 = 2^8 * 2^2`, and `2^8` comes from squaring `2` three times.
//!
//! The plain forms multiply with `*`, so they overflow the same way `i64::pow` does
//! (a panic in debug builds). The `checked_*` forms return `None` instead.

use std::{
    fmt::{self, Display, Formatter},
    ops::Mul,
};

use tracing::debug;

use crate::{
    error::{DigitPowError, DigitPowResult},
    impl_square_multiply,
};

/// Primitive integers that can be raised to an [`Exponent`]
pub trait SquareMultiply: Copy + PartialEq + Mul<Output = Self> {
    const ONE: Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

impl_square_multiply!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A non-negative exponent. Negative exponents have no integer result, so they are
/// rejected when the `Exponent` is built rather than when it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exponent(u64);

impl Exponent {
    pub const ZERO: Self = Self(0);

    pub fn new(exponent: i64) -> DigitPowResult<Self> {
        u64::try_from(exponent)
            .map(Self)
            .map_err(|_| DigitPowError::NegativeExponent(exponent))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    fn is_odd(self) -> bool {
        self.0 & 1 == 1
    }

    fn halve(self) -> Self {
        Self(self.0 >> 1)
    }
}

impl From<u64> for Exponent {
    fn from(exponent: u64) -> Self {
        Self(exponent)
    }
}

impl From<u32> for Exponent {
    fn from(exponent: u32) -> Self {
        Self(exponent as u64)
    }
}

impl TryFrom<i64> for Exponent {
    type Error = DigitPowError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for Exponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `base^exponent` by recursively halving the exponent:
/// `a^b = (a^(b/2))^2`, times an extra `a` when `b` is odd.
///
/// `0^0` is 1 here, callers that treat it as indeterminate should go through [`power`].
///
/// # Examples
/// ```
/// use digitpow::power::{power_recursive, Exponent};
///
/// assert_eq!(power_recursive(2i64, Exponent::from(10u32)), 1024);
/// assert_eq!(power_recursive(-3i32, Exponent::from(3u32)), -27);
/// ```
pub fn power_recursive<T: SquareMultiply>(base: T, exponent: Exponent) -> T {
    if exponent == Exponent::ZERO {
        return T::ONE;
    }

    let half = power_recursive(base, exponent.halve());

    if exponent.is_odd() {
        half * half * base
    } else {
        half * half
    }
}

/// `base^exponent` by walking the bits of the exponent from the bottom, squaring `base`
/// at each step and folding it into the result for every set bit.
///
/// Returns exactly what [`power_recursive`] does, without the call stack.
pub fn power_iterative<T: SquareMultiply>(mut base: T, exponent: Exponent) -> T {
    let mut result = T::ONE;
    let mut exp = exponent;

    while exp != Exponent::ZERO {
        if exp.is_odd() {
            result = result * base;
        }
        exp = exp.halve();

        // Squaring after the top bit would overflow on results that fit, e.g. 2^62
        if exp != Exponent::ZERO {
            base = base * base;
        }
    }

    result
}

/// [`power_recursive`], returning `None` on overflow
pub fn checked_power_recursive<T: SquareMultiply>(base: T, exponent: Exponent) -> Option<T> {
    if exponent == Exponent::ZERO {
        return Some(T::ONE);
    }

    let half = checked_power_recursive(base, exponent.halve())?;
    let squared = half.checked_mul(half)?;

    if exponent.is_odd() {
        squared.checked_mul(base)
    } else {
        Some(squared)
    }
}

/// [`power_iterative`], returning `None` on overflow
pub fn checked_power_iterative<T: SquareMultiply>(
    mut base: T,
    exponent: Exponent,
) -> Option<T> {
    let mut result = T::ONE;
    let mut exp = exponent;

    while exp != Exponent::ZERO {
        if exp.is_odd() {
            result = result.checked_mul(base)?;
        }
        exp = exp.halve();

        if exp != Exponent::ZERO {
            base = base.checked_mul(base)?;
        }
    }

    Some(result)
}

/// `base^exponent` by repeated multiplication, `O(exponent)`. Only useful as a reference
/// for the squaring forms.
pub fn power_naive<T: SquareMultiply>(base: T, exponent: Exponent) -> T {
    (0..exponent.get()).fold(T::ONE, |acc, _| acc * base)
}

/// Which square-and-multiply form [`power_with`] uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Recursive,
    #[default]
    Iterative,
}

/// Checked `base^exponent` for untrusted input.
///
/// Unlike the plain forms this reports every case without an integer answer:
/// - `0^0` is [`DigitPowError::ZeroToTheZero`]
/// - a negative exponent is [`DigitPowError::NegativeExponent`]
/// - a result outside of `i64` is [`DigitPowError::Overflow`]
///
/// # Examples
/// ```
/// use digitpow::{power, DigitPowError};
///
/// assert_eq!(power(2, 10), Ok(1024));
/// assert_eq!(power(0, 0), Err(DigitPowError::ZeroToTheZero));
/// assert_eq!(power(2, -1), Err(DigitPowError::NegativeExponent(-1)));
/// ```
pub fn power(base: i64, exponent: i64) -> DigitPowResult<i64> {
    power_with(Strategy::default(), base, exponent)
}

/// [`power`] with an explicit [`Strategy`]
pub fn power_with(strategy: Strategy, base: i64, exponent: i64) -> DigitPowResult<i64> {
    if base == 0 && exponent == 0 {
        debug!("rejected 0^0");
        return Err(DigitPowError::ZeroToTheZero);
    }

    let exp = Exponent::new(exponent)
        .inspect_err(|_| debug!(exponent, "rejected negative exponent"))?;

    let result = match strategy {
        Strategy::Recursive => checked_power_recursive(base, exp),
        Strategy::Iterative => checked_power_iterative(base, exp),
    };

    result.ok_or(DigitPowError::Overflow {
        base,
        exponent: exp.get(),
    })
}
