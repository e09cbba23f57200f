use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::BigInt;

/// Add two digit sequences (least significant first), propagating carry.
fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;

    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let sum = x + y + carry;
        result.push(sum % 10);
        carry = sum / 10;
    }

    if carry > 0 {
        result.push(carry);
    }

    result
}

/// Subtract `smaller` from `larger` digit by digit, propagating borrow.
/// Callers must pass the operand with the larger (or equal) magnitude first.
fn sub_magnitudes(larger: &[u8], smaller: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(larger.len());
    let mut borrow = 0i8;

    for i in 0..larger.len() {
        let y = smaller.get(i).copied().unwrap_or(0);
        let mut diff = larger[i] as i8 - y as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }

    result
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        if self.negative != other.negative {
            // Mixed signs reduce to subtraction: a + b == a - (-b).
            return self - &(-other);
        }
        let mut result = BigInt {
            digits: add_magnitudes(&self.digits, &other.digits),
            negative: self.negative,
        };
        result.normalize();
        result
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        let mut result = if self.negative == other.negative {
            // Subtract the smaller magnitude from the larger. The result
            // keeps the left operand's sign when its magnitude dominates
            // and flips otherwise; the same rule covers the both-negative
            // case because the order over negatives mirrors magnitudes.
            match self.cmp_magnitude(other) {
                Ordering::Less => BigInt {
                    digits: sub_magnitudes(&other.digits, &self.digits),
                    negative: !self.negative,
                },
                _ => BigInt {
                    digits: sub_magnitudes(&self.digits, &other.digits),
                    negative: self.negative,
                },
            }
        } else {
            // a - (-b) == a + b and (-a) - b == -(a + b): magnitudes add
            // and the left operand's sign wins.
            BigInt {
                digits: add_magnitudes(&self.digits, &other.digits),
                negative: self.negative,
            }
        };
        result.normalize();
        result
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        // Schoolbook long multiplication into a buffer sized for the worst
        // case; position i+j accumulates digit_i * digit_j.
        let mut digits = vec![0u8; self.digits.len() + other.digits.len()];

        for (i, &a) in self.digits.iter().enumerate() {
            let mut carry = 0u32;
            for (j, &b) in other.digits.iter().enumerate() {
                let product = a as u32 * b as u32 + digits[i + j] as u32 + carry;
                digits[i + j] = (product % 10) as u8;
                carry = product / 10;
            }
            digits[i + other.digits.len()] += carry as u8;
        }

        let mut result = BigInt {
            digits,
            negative: self.negative != other.negative,
        };
        result.normalize();
        result
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut result = self.clone();
        if !result.is_zero() {
            result.negative = !result.negative;
        }
        result
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        &self - &other
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        &self * &other
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        *self = &*self + other;
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, other: BigInt) {
        *self += &other;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        *self = &*self - other;
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, other: BigInt) {
        *self -= &other;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, other: BigInt) {
        *self *= &other;
    }
}

impl BigInt {
    /// Add one in place, returning the updated value (pre-increment).
    pub fn pre_increment(&mut self) -> BigInt {
        *self += BigInt::one();
        self.clone()
    }

    /// Add one in place, returning the value from before the change
    /// (post-increment).
    pub fn post_increment(&mut self) -> BigInt {
        let before = self.clone();
        *self += BigInt::one();
        before
    }

    /// Subtract one in place, returning the updated value (pre-decrement).
    pub fn pre_decrement(&mut self) -> BigInt {
        *self -= BigInt::one();
        self.clone()
    }

    /// Subtract one in place, returning the value from before the change
    /// (post-decrement).
    pub fn post_decrement(&mut self) -> BigInt {
        let before = self.clone();
        *self -= BigInt::one();
        before
    }
}
