use thiserror::Error;

/// Errors surfaced by the checked constructors and the `power` entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitPowError {
    /// A positional base must be at least 2
    #[error("invalid base {0}: base must be at least 2")]
    InvalidBase(u64),
    #[error("Exponent must be non-negative, got {0}")]
    NegativeExponent(i64),
    /// `0^0` is indeterminate, it is reported instead of being computed as 1
    #[error("Math error: 0^0 is indeterminate")]
    ZeroToTheZero,
    #[error("{base}^{exponent} overflows the result type")]
    Overflow { base: i64, exponent: u64 },
}

pub type DigitPowResult<T> = Result<T, DigitPowError>;
pub type DigitPowTestResult = Result<(), DigitPowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DigitPowError::InvalidBase(1).to_string(),
            "invalid base 1: base must be at least 2"
        );
        assert_eq!(
            DigitPowError::ZeroToTheZero.to_string(),
            "Math error: 0^0 is indeterminate"
        );
        assert_eq!(
            DigitPowError::Overflow {
                base: 2,
                exponent: 64
            }
            .to_string(),
            "2^64 overflows the result type"
        );
    }
}
