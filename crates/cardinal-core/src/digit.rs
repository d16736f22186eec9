//! Decimal digit representation.

use std::fmt::{self, Display};

use crate::NumberError;

/// A decimal digit in the range 0-9.
///
/// Digits are ordered by their numeric value.
///
/// # Examples
///
/// ```
/// use cardinal_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::try_from_value(7)?;
/// assert_eq!(digit, Digit::D7);
///
/// // Create from a character
/// let digit = Digit::try_from('0')?;
/// assert_eq!(digit, Digit::D0);
/// # Ok::<(), cardinal_core::NumberError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 0 to 9, in ascending order.
    ///
    /// `Digit::ALL[n].value() == n` for every index.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidDigit`] if `value` is greater than 9.
    pub fn try_from_value(value: u8) -> Result<Self, NumberError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(NumberError::InvalidDigit { value })
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the digit is even. Zero is even.
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.value() % 2 == 0
    }

    /// Returns `true` if the digit is odd.
    #[must_use]
    pub const fn is_odd(self) -> bool {
        !self.is_even()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl TryFrom<u8> for Digit {
    type Error = NumberError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = NumberError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        let value = ch
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| NumberError::Malformed {
                token: ch.to_string(),
            })?;
        Self::try_from_value(value)
    }
}
