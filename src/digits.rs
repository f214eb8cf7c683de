//! Positional decomposition of a number in an arbitrary [`Base`].
//!
//! All of this is integer-only. A number `n > 0` has `k` digits where
//! `base^(k-1) <= n < base^k`, and `0` is treated as the single digit `0`.

use std::iter::FusedIterator;

use crate::base::Base;

/// Number of positional digits of `number` in `base`. `digit_count(0, base)` is 1
///
/// # Examples
/// ```
/// use digitpow::{digits::digit_count, Base};
///
/// assert_eq!(digit_count(548834, Base::DECIMAL), 6);
/// assert_eq!(digit_count(0xC84E1, Base::HEXADECIMAL), 5);
/// assert_eq!(digit_count(0, Base::BINARY), 1);
/// ```
pub fn digit_count(number: u64, base: Base) -> u32 {
    if number == 0 {
        1
    } else {
        base.get_mag(number) + 1
    }
}

/// The digit of `number` at position `index`, least significant first.
///
/// This is `(number mod base^(index+1) - number mod base^index) / base^index`, which
/// reduces to `number / base^index mod base`. Positions at or past
/// [`digit_count`] are leading zeroes, so they return 0.
pub fn digit_at(number: u64, base: Base, index: u32) -> u64 {
    match base.pow(index) {
        Some(weight) => number / weight % base.get(),
        // base^index > u64::MAX >= number
        None => 0,
    }
}

/// Iterator over the digits of a number, least significant first.
///
/// Yields exactly [`digit_count`] items, so `0` yields a single `0`.
#[derive(Debug, Clone)]
pub struct Digits {
    rest: u64,
    base: u64,
    remaining: u32,
}

impl Digits {
    pub fn new(number: u64, base: Base) -> Self {
        Self {
            rest: number,
            base: base.get(),
            remaining: digit_count(number, base),
        }
    }
}

impl Iterator for Digits {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let digit = self.rest % self.base;
        self.rest /= self.base;
        self.remaining -= 1;

        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for Digits {}

impl FusedIterator for Digits {}
