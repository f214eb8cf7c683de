//! Two small integer utilities:
//! - self-power (narcissistic) number checks in any positional base
//! - exponentiation by squaring, recursive and iterative
//!
//! # Examples
//! ```
//! use digitpow::{is_self_power, power, Base};
//!
//! assert!(is_self_power(548834, Base::DECIMAL));
//! assert!(is_self_power(0xC84E1, Base::HEXADECIMAL));
//! assert_eq!(power(2, 10), Ok(1024));
//! ```

pub mod base;
pub mod digits;
pub mod error;
pub mod power;
pub mod self_power;

mod macros;

pub use base::Base;
pub use error::{DigitPowError, DigitPowResult};
pub use power::{power, power_with, Exponent, Strategy};
pub use self_power::{is_self_power, is_self_power_decimal, self_power_sum, self_powers_in};
