use std::str::FromStr;

use thiserror::Error;

use crate::BigInt;

/// Error returned when a string cannot be parsed as a decimal integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The input was empty, a bare sign, or contained a character that is
    /// not an ASCII decimal digit after the optional leading `-`.
    #[error("invalid decimal integer format")]
    InvalidFormat,
}

/// Parse an optional leading `-` followed by one or more ASCII decimal
/// digits. No `+`, no whitespace, no grouping separators.
///
/// Leading zeros are accepted and collapse during normalization, so
/// `"007"` parses to 7 and `"-0"` to (non-negative) zero.
///
/// # Example
///
/// ```
/// use bignum::BigInt;
///
/// let n: BigInt = "-12345".parse().unwrap();
/// assert_eq!(n.to_string(), "-12345");
/// assert!("12x".parse::<BigInt>().is_err());
/// ```
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(ParseBigIntError::InvalidFormat);
        }

        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars().rev() {
            let d = c
                .to_digit(10)
                .ok_or(ParseBigIntError::InvalidFormat)?;
            digits.push(d as u8);
        }

        let mut value = BigInt { digits, negative };
        value.normalize();
        Ok(value)
    }
}
