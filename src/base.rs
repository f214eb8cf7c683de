//! The radix of a positional number system.

use std::fmt::{self, Display, Formatter};

use crate::error::{DigitPowError, DigitPowResult};

/// A positional base, guaranteed to be at least 2.
///
/// The only way to get one is [`Base::new`] (or `TryFrom<u64>`), or one of the
/// associated constants, so every function taking a `Base` can skip the check.
///
/// # Examples
/// ```
/// use digitpow::Base;
///
/// assert_eq!(Base::new(16), Ok(Base::HEXADECIMAL));
/// assert!(Base::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u64);

impl Base {
    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    pub fn new(base: u64) -> DigitPowResult<Self> {
        if base < 2 {
            Err(DigitPowError::InvalidBase(base))
        } else {
            Ok(Self(base))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// `self^exp`, or `None` if it doesn't fit in a `u64`
    pub fn pow(self, exp: u32) -> Option<u64> {
        self.0.checked_pow(exp)
    }

    /// The highest exponent `x` such that `n >= self^x`. `n` must be non-zero
    pub fn get_mag(self, n: u64) -> u32 {
        n.ilog(self.0)
    }
}

impl TryFrom<u64> for Base {
    type Error = DigitPowError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Base> for u64 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
