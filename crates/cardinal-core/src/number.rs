//! Cardinal numbers as sequences of decimal digits.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Digit, NumberError};

/// A non-negative integer stored as its decimal digits, most significant first.
///
/// A `Number` always holds at least one digit, and the only number with a
/// leading zero is `0` itself.
///
/// Numbers are ordered by digit count first and then lexicographically by digit
/// value, which coincides with numeric order.
///
/// # Examples
///
/// ```
/// use cardinal_core::Number;
///
/// let n = Number::new(1221)?;
/// assert_eq!(n.len(), 4);
/// assert_eq!(n.to_string(), "1221");
/// assert!(n.is_palindrome());
/// assert_eq!(n.distinct_digit_count(), 2);
///
/// assert!(Number::new(-1).is_err());
/// # Ok::<(), cardinal_core::NumberError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    digits: Vec<Digit>,
}

#[allow(clippy::len_without_is_empty)]
impl Number {
    /// Creates a number from a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Negative`] if `value` is negative.
    pub fn new(value: i64) -> Result<Self, NumberError> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| NumberError::Negative {
                token: value.to_string(),
            })
    }

    /// Returns the digits, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns how many times each digit value occurs, indexed by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardinal_core::Number;
    ///
    /// let freq = Number::from(1_002_u64).digit_frequency();
    /// assert_eq!(freq, [2, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn digit_frequency(&self) -> [usize; 10] {
        let mut freq = [0; 10];
        for digit in &self.digits {
            freq[usize::from(digit.value())] += 1;
        }
        freq
    }

    /// Returns the number of distinct digit values.
    #[must_use]
    pub fn distinct_digit_count(&self) -> usize {
        self.digit_frequency().iter().filter(|&&n| n > 0).count()
    }

    /// Returns `true` if no digit value occurs more than once.
    #[must_use]
    pub fn has_only_unique_digits(&self) -> bool {
        self.digit_frequency().iter().all(|&n| n <= 1)
    }

    /// Returns `true` if every digit is even.
    #[must_use]
    pub fn has_only_even_digits(&self) -> bool {
        self.digits.iter().all(|d| d.is_even())
    }

    /// Returns the number of even digits.
    #[must_use]
    pub fn even_digit_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_even()).count()
    }

    /// Returns the number of odd digits.
    #[must_use]
    pub fn odd_digit_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_odd()).count()
    }

    /// Returns `true` if the number has as many even digits as odd digits.
    #[must_use]
    pub fn has_equal_even_odd_counts(&self) -> bool {
        self.even_digit_count() == self.odd_digit_count()
    }

    /// Returns `true` if each digit is greater than or equal to the previous one.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.digits.is_sorted()
    }

    /// Returns `true` if each digit is less than or equal to the previous one.
    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.digits.iter().rev().is_sorted()
    }

    /// Returns `true` if the digits read the same in both directions.
    #[must_use]
    pub fn is_palindrome(&self) -> bool {
        let (mut i, mut j) = (0, self.digits.len());
        while i + 1 < j {
            j -= 1;
            if self.digits[i] != self.digits[j] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        // Every byte of an unsigned decimal rendering is an ASCII digit.
        let digits = value
            .to_string()
            .bytes()
            .map(|b| Digit::ALL[usize::from(b - b'0')])
            .collect();
        Self { digits }
    }
}

impl TryFrom<i64> for Number {
    type Error = NumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Number {
    type Err = NumberError;

    /// Parses a base-10 integer token.
    ///
    /// Negative integers of any magnitude are rejected with
    /// [`NumberError::Negative`]; a negative zero is zero. Anything else that
    /// is not an integer fitting in a `u64` is [`NumberError::Malformed`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<u64>() {
            return Ok(Self::from(value));
        }
        match s.strip_prefix('-') {
            Some(magnitude)
                if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) =>
            {
                if magnitude.bytes().all(|b| b == b'0') {
                    Ok(Self::from(0_u64))
                } else {
                    Err(NumberError::Negative {
                        token: s.to_owned(),
                    })
                }
            }
            _ => Err(NumberError::Malformed {
                token: s.to_owned(),
            }),
        }
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            f.write_char(char::from(b'0' + digit.value()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn num(value: u64) -> Number {
        Number::from(value)
    }

    fn negative(token: &str) -> NumberError {
        NumberError::Negative {
            token: token.to_owned(),
        }
    }

    #[test]
    fn test_construction() {
        assert_eq!(num(0).digits(), [Digit::D0]);
        assert_eq!(num(907).digits(), [Digit::D9, Digit::D0, Digit::D7]);
        assert_eq!(Number::new(42), Ok(num(42)));
        assert_eq!(Number::new(-7), Err(negative("-7")));
        assert!(Number::try_from(i64::MIN).unwrap_err().is_negative());
        assert_eq!(num(u64::MAX).to_string(), u64::MAX.to_string());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("123".parse::<Number>(), Ok(num(123)));
        assert_eq!("+5".parse::<Number>(), Ok(num(5)));
        assert_eq!("007".parse::<Number>(), Ok(num(7)));
        assert_eq!("-0".parse::<Number>(), Ok(num(0)));
        assert_eq!("-000".parse::<Number>(), Ok(num(0)));
        assert_eq!("-12".parse::<Number>(), Err(negative("-12")));
        for token in ["-99999999999999999999", "-9223372036854775809"] {
            assert_eq!(token.parse::<Number>(), Err(negative(token)));
        }
        for token in ["", "-", "--1", "-1a", "abc", "1.5", "12a", "99999999999999999999"] {
            assert_eq!(
                token.parse::<Number>(),
                Err(NumberError::Malformed {
                    token: token.to_owned()
                }),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_ordering() {
        assert!(num(9) < num(10));
        assert!(num(12) < num(89));
        assert!(num(4567) > num(999));
        assert_eq!(num(55).cmp(&num(55)), Ordering::Equal);
    }

    #[test]
    fn test_palindrome() {
        for n in [0, 7, 11, 121, 1221, 12_321] {
            assert!(num(n).is_palindrome(), "{n}");
        }
        for n in [10, 12, 123, 1231] {
            assert!(!num(n).is_palindrome(), "{n}");
        }
    }

    #[test]
    fn test_unique_digits() {
        assert!(num(123).has_only_unique_digits());
        assert!(num(1023).has_only_unique_digits());
        assert!(num(0).has_only_unique_digits());
        assert!(!num(112).has_only_unique_digits());
        assert!(!num(1231).has_only_unique_digits());
    }

    #[test]
    fn test_distinct_digit_count() {
        assert_eq!(num(0).distinct_digit_count(), 1);
        assert_eq!(num(1111).distinct_digit_count(), 1);
        assert_eq!(num(1231).distinct_digit_count(), 3);
        assert_eq!(num(9_876_543_210).distinct_digit_count(), 10);
    }

    #[test]
    fn test_parity_counts() {
        let n = num(2068);
        assert!(n.has_only_even_digits());
        assert_eq!(n.even_digit_count(), 4);
        assert_eq!(n.odd_digit_count(), 0);
        assert!(!n.has_equal_even_odd_counts());

        let n = num(1234);
        assert!(!n.has_only_even_digits());
        assert_eq!(n.even_digit_count(), 2);
        assert_eq!(n.odd_digit_count(), 2);
        assert!(n.has_equal_even_odd_counts());

        assert!(num(0).has_only_even_digits());
    }

    #[test]
    fn test_monotonic() {
        assert!(num(1).is_ascending() && num(1).is_descending());
        assert!(num(1123).is_ascending());
        assert!(!num(1123).is_descending());
        assert!(num(9520).is_descending());
        assert!(!num(9520).is_ascending());
        assert!(num(444).is_ascending() && num(444).is_descending());
        assert!(!num(132).is_ascending() && !num(132).is_descending());
    }

    #[test]
    fn test_display() {
        assert_eq!(num(0).to_string(), "0");
        assert_eq!(num(1_000_200).to_string(), "1000200");
    }

    proptest! {
        #[test]
        fn display_matches_decimal(n in any::<u64>()) {
            let number = num(n);
            let decimal = n.to_string();
            prop_assert_eq!(number.len(), decimal.len());
            prop_assert_eq!(number.to_string(), decimal);
        }

        #[test]
        fn negative_input_is_rejected(n in i64::MIN..0) {
            prop_assert_eq!(Number::new(n), Err(negative(&n.to_string())));
            prop_assert_eq!(n.to_string().parse::<Number>(), Err(negative(&n.to_string())));
        }

        #[test]
        fn ordering_matches_numeric_order(a in any::<u64>(), b in any::<u64>()) {
            let (x, y) = (num(a), num(b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!(x.cmp(&y) == Ordering::Equal, x == y);
        }

        #[test]
        fn even_and_odd_counts_cover_all_digits(n in any::<u64>()) {
            let number = num(n);
            prop_assert_eq!(number.even_digit_count() + number.odd_digit_count(), number.len());
            prop_assert_eq!(number.digit_frequency().iter().sum::<usize>(), number.len());
        }

        #[test]
        fn palindrome_matches_reversed_string(n in any::<u64>()) {
            let s = n.to_string();
            let reversed: String = s.chars().rev().collect();
            prop_assert_eq!(num(n).is_palindrome(), s == reversed);
        }
    }
}
