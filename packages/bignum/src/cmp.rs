use std::cmp::Ordering;

use crate::BigInt;

impl BigInt {
    /// Compare absolute values, ignoring signs. More digits means a larger
    /// magnitude (valid because values are normalized); equal digit counts
    /// fall back to a most-significant-first digit scan.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            // Between negatives the larger magnitude is the smaller value.
            (true, true) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_negative_less_than_positive() {
        assert!(n("-1") < n("1"));
        assert!(n("-999999999999") < n("1"));
        assert!(n("-1") < n("0"));
        assert!(n("0") < n("1"));
    }

    #[test]
    fn test_digit_count_decides() {
        assert!(n("999") < n("1000"));
        assert!(n("1000") > n("999"));
        // Inverted for negatives.
        assert!(n("-1000") < n("-999"));
        assert!(n("-999") > n("-1000"));
    }

    #[test]
    fn test_same_length_digit_scan() {
        assert!(n("123") < n("124"));
        assert!(n("129") < n("131"));
        assert!(n("-124") < n("-123"));
        assert!(n("-123") > n("-124"));
    }

    #[test]
    fn test_equality() {
        assert_eq!(n("123"), n("123"));
        assert_eq!(n("-123"), n("-123"));
        assert_ne!(n("123"), n("-123"));
        assert_eq!(n("007"), n("7"));
        assert_eq!(n("-0"), n("0"));
        assert_eq!(n("123").cmp(&n("123")), Ordering::Equal);
        assert_eq!(n("-5").cmp(&n("-5")), Ordering::Equal);
    }

    #[test]
    fn test_derived_operators() {
        assert!(n("2") <= n("2"));
        assert!(n("2") <= n("3"));
        assert!(n("3") >= n("2"));
        assert!(n("3") >= n("3"));
        assert!(n("2") != n("3"));
    }

    #[test]
    fn test_large_values() {
        let big = "1".repeat(100);
        let bigger = format!("{}2", "1".repeat(99));
        assert!(n(&big) < n(&bigger));
        assert!(n(&format!("-{}", big)) > n(&format!("-{}", bigger)));
    }

    #[test]
    fn test_sorting() {
        let mut values = vec![n("3"), n("-10"), n("0"), n("-2"), n("25"), n("-0")];
        values.sort();
        let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["-10", "-2", "0", "0", "3", "25"]);
    }
}
