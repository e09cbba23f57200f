use std::fmt;

/// A signed big integer represented as a vector of decimal digits
/// (least significant first) plus a sign flag.
///
/// Every value is kept normalized: the digit vector is never empty, carries
/// no most-significant zeros except for the single-digit zero itself, and
/// zero is never negative. Structural equality is therefore value equality.
///
/// # Example
///
/// ```
/// use bignum::BigInt;
///
/// let a: BigInt = "999999999999999999999".parse().unwrap();
/// let b: BigInt = "1".parse().unwrap();
/// assert_eq!((a + b).to_string(), "1000000000000000000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) digits: Vec<u8>,
    pub(crate) negative: bool,
}

impl BigInt {
    /// Create a BigInt representing zero.
    pub fn zero() -> Self {
        BigInt {
            digits: vec![0],
            negative: false,
        }
    }

    /// Create a BigInt representing one.
    pub fn one() -> Self {
        BigInt {
            digits: vec![1],
            negative: false,
        }
    }

    /// Create a BigInt from an i64.
    pub fn from_i64(value: i64) -> Self {
        // unsigned_abs: i64::MIN has no i64 negation.
        let mut magnitude = value.unsigned_abs();
        if magnitude == 0 {
            return BigInt::zero();
        }
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        BigInt {
            digits,
            negative: value < 0,
        }
    }

    /// True if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// True if the value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Restore the representation invariants after a digit buffer has been
    /// built: drop most-significant zeros down to a single digit, and clear
    /// the sign when the remaining magnitude is zero.
    pub(crate) fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits == [0] {
            self.negative = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::from_i64(value)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for &d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
