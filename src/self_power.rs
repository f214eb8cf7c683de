//! Self-power (narcissistic, Armstrong) numbers: numbers equal to the sum of their own
//! digits, each raised to the number of digits.

use std::ops::Range;

use tracing::trace;

use crate::{
    base::Base,
    digits::{digit_count, Digits},
};

/// `Σ digit^k` over the digits of `number` in `base`, where `k` is the digit count.
///
/// Every term fits in a `u128` since `digit^k < base^k <= base * number`. Returns `None`
/// only when the sum itself overflows, which can only happen for numbers that are not
/// self-power anyway.
pub fn self_power_sum(number: u64, base: Base) -> Option<u128> {
    let k = digit_count(number, base);

    Digits::new(number, base).try_fold(0u128, |acc, digit| {
        acc.checked_add((digit as u128).pow(k))
    })
}

/// Whether `number` is equal to the sum of its digits in `base`, each raised to the
/// number of digits. `0` is self-power in every base.
///
/// # Examples
/// ```
/// use digitpow::{is_self_power, Base};
///
/// assert!(is_self_power(153, Base::DECIMAL));
/// assert!(is_self_power(0xEA1, Base::HEXADECIMAL));
/// assert!(!is_self_power(0xEA2, Base::HEXADECIMAL));
/// ```
pub fn is_self_power(number: u64, base: Base) -> bool {
    let k = digit_count(number, base);
    let target = number as u128;

    // Bail out as soon as the running sum passes the number
    let mut sum = 0u128;
    for digit in Digits::new(number, base) {
        sum = match sum.checked_add((digit as u128).pow(k)) {
            Some(sum) if sum <= target => sum,
            _ => {
                trace!(number, %base, "sum exceeds number");
                return false;
            }
        };
    }

    trace!(number, %base, sum, "self-power sum");
    sum == target
}

/// Decimal shorthand for [`is_self_power`]. Self-power numbers are naturals, so negative
/// input is never self-power.
pub fn is_self_power_decimal(number: i64) -> bool {
    match u64::try_from(number) {
        Ok(number) => is_self_power(number, Base::DECIMAL),
        Err(_) => false,
    }
}

/// Iterator over the self-power numbers in a half-open range, in increasing order
#[derive(Debug, Clone)]
pub struct SelfPowers {
    range: Range<u64>,
    base: Base,
}

impl Iterator for SelfPowers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.base;
        self.range.find(|&n| is_self_power(n, base))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.range.size_hint().1)
    }
}

/// All self-power numbers in `range` for `base`. This is a linear scan, so keep ranges
/// reasonably small
///
/// # Examples
/// ```
/// use digitpow::{self_powers_in, Base};
///
/// let found: Vec<u64> = self_powers_in(100..1000, Base::DECIMAL).collect();
/// assert_eq!(found, vec![153, 370, 371, 407]);
/// ```
pub fn self_powers_in(range: Range<u64>, base: Base) -> SelfPowers {
    SelfPowers { range, base }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

    use super::*;
    use crate::error::DigitPowTestResult;

    const DEC_SELF_POWERS: [u64; 12] = [
        0, 153, 370, 371, 407, 1634, 8208, 9474, 54748, 92727, 93084, 548834,
    ];
    const DEC_OTHERS: [u64; 3] = [12, 225, 373];

    const HEX_SELF_POWERS: [u64; 4] = [0x173, 0xAA9, 0xEA1, 0xC84E1];

    #[test]
    fn decimal() {
        for n in DEC_SELF_POWERS {
            assert!(is_self_power(n, Base::DECIMAL), "{} should be self-power", n);
        }
        for n in DEC_OTHERS {
            assert!(!is_self_power(n, Base::DECIMAL), "{} shouldn't be self-power", n);
        }
    }

    #[test]
    fn decimal_shorthand() {
        for n in DEC_SELF_POWERS.iter().chain(DEC_OTHERS.iter()) {
            assert_eq!(
                is_self_power_decimal(*n as i64),
                is_self_power(*n, Base::DECIMAL)
            );
        }

        assert!(is_self_power_decimal(370));
        assert!(!is_self_power_decimal(225));
        assert!(!is_self_power_decimal(-23));
        assert!(!is_self_power_decimal(-153));
        assert!(!is_self_power_decimal(i64::MIN));
        assert!(is_self_power_decimal(0));
    }

    #[test]
    fn hexadecimal() {
        for n in HEX_SELF_POWERS {
            assert!(is_self_power(n, Base::HEXADECIMAL), "{:#x} should be self-power", n);
        }
        assert!(!is_self_power(0xEA2, Base::HEXADECIMAL));
    }

    #[test]
    fn single_digits_are_self_power() -> DigitPowTestResult {
        for base in [2, 3, 10, 16, 1000] {
            let base = Base::new(base)?;
            for n in 0..base.get() {
                assert!(is_self_power(n, base));
            }
        }

        Ok(())
    }

    #[test]
    fn sums() {
        assert_eq!(self_power_sum(0, Base::DECIMAL), Some(0));
        assert_eq!(self_power_sum(12, Base::DECIMAL), Some(5));
        assert_eq!(self_power_sum(225, Base::DECIMAL), Some(141));
        assert_eq!(self_power_sum(548834, Base::DECIMAL), Some(548834));
        // 19 nines
        assert_eq!(
            self_power_sum(9_999_999_999_999_999_999, Base::DECIMAL),
            Some(19 * 9u128.pow(19))
        );
    }

    #[test]
    fn sum_agrees_with_check() {
        let numbers = Uniform::new_inclusive(0, 10_000_000u64);

        for _ in 0..10_000 {
            let n = numbers.sample(&mut thread_rng());
            for base in [Base::BINARY, Base::OCTAL, Base::DECIMAL, Base::HEXADECIMAL] {
                assert_eq!(
                    is_self_power(n, base),
                    self_power_sum(n, base) == Some(n as u128)
                );
            }
        }
    }

    #[test]
    fn no_overflow_at_extremes() -> DigitPowTestResult {
        assert!(!is_self_power(u64::MAX, Base::DECIMAL));
        assert!(!is_self_power(u64::MAX, Base::BINARY));
        assert!(!is_self_power(u64::MAX, Base::HEXADECIMAL));
        assert!(!is_self_power(u64::MAX, Base::new(u64::MAX)?));
        assert!(is_self_power(u64::MAX - 1, Base::new(u64::MAX)?));

        Ok(())
    }

    #[test]
    fn idempotent() {
        for n in DEC_SELF_POWERS.iter().chain(DEC_OTHERS.iter()) {
            assert_eq!(
                is_self_power(*n, Base::DECIMAL),
                is_self_power(*n, Base::DECIMAL)
            );
        }
    }

    #[test]
    fn scan() {
        let found: Vec<u64> = self_powers_in(0..1_000_000, Base::DECIMAL).collect();
        assert_eq!(
            found,
            vec![
                0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407, 1634, 8208, 9474, 54748,
                92727, 93084, 548834
            ]
        );

        let found: Vec<u64> = self_powers_in(0x10..0x1000, Base::HEXADECIMAL).collect();
        assert_eq!(
            found,
            vec![
                0x156, 0x173, 0x208, 0x248, 0x285, 0x4A5, 0x5B0, 0x5B1, 0x60B, 0x64B, 0x8C0,
                0x8C1, 0x99A, 0xAA9, 0xAC3, 0xCA8, 0xE69, 0xEA0, 0xEA1
            ]
        );

        assert_eq!(self_powers_in(10..153, Base::DECIMAL).next(), None);
        assert_eq!(self_powers_in(5..5, Base::DECIMAL).next(), None);
    }
}
