//! Unsigned integer targets for parsed numbers.
//!
//! Numbers in a record are unsigned decimal digit runs. They can be parsed into any
//! type implementing [`Natural`], which covers the primitive unsigned integers as
//! well as [`BigUint`](num_bigint::BigUint) for ids of unbounded magnitude.
//!
//! Accumulation is checked: a digit run that does not fit the target type is
//! rejected rather than wrapped.

use num_traits::{CheckedAdd, CheckedMul, Unsigned};

/// An unsigned integer type that digit runs can be accumulated into.
pub trait Natural: Unsigned + CheckedAdd + CheckedMul + From<u8> + Clone + Send + Sync + 'static {}

impl<T> Natural for T where
    T: Unsigned + CheckedAdd + CheckedMul + From<u8> + Clone + Send + Sync + 'static
{
}

/// Combines decimal `digits` left-to-right into an `N`.
///
/// Returns `None` if any character is not an ASCII digit or if the value overflows `N`.
/// An empty slice yields zero.
pub fn from_digits<N: Natural>(digits: &[char]) -> Option<N> {
    let ten = N::from(10u8);
    digits.iter().try_fold(N::zero(), |acc, c| {
        let digit = u8::try_from(c.to_digit(10)?).ok()?;
        acc.checked_mul(&ten)?.checked_add(&N::from(digit))
    })
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    fn digits(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn digits_combine_left_to_right() {
        assert_eq!(from_digits::<u32>(&digits("12345")), Some(12345));
        assert_eq!(from_digits::<u64>(&digits("007")), Some(7));
        assert_eq!(from_digits::<u8>(&digits("")), Some(0));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(from_digits::<u8>(&digits("255")), Some(255));
        assert_eq!(from_digits::<u8>(&digits("256")), None);
        assert_eq!(from_digits::<u32>(&digits("4294967296")), None);
    }

    #[test]
    fn non_digits_are_rejected() {
        assert_eq!(from_digits::<u32>(&digits("12a")), None);
        assert_eq!(from_digits::<u32>(&digits("١٢")), None);
    }

    #[test]
    fn bigint_has_no_upper_bound() {
        let huge = "340282366920938463463374607431768211456"; // u128::MAX + 1
        assert_eq!(from_digits::<u128>(&digits(huge)), None);
        assert_eq!(
            from_digits::<BigUint>(&digits(huge)),
            Some(BigUint::from(u128::MAX) + 1u8)
        );
    }
}
