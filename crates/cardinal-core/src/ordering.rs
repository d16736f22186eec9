//! Orderings used to sort numbers in a [`NumberSequence`](crate::NumberSequence).
//!
//! Each function returns a plain comparator that can be passed to
//! [`NumberSequence::sorted_by`](crate::NumberSequence::sorted_by) or any
//! slice sorting method.
//!
//! # Examples
//!
//! ```
//! use cardinal_core::{Number, ordering};
//!
//! let mut numbers: Vec<Number> = [4567_u64, 3, 12].into_iter().map(Number::from).collect();
//! numbers.sort_by(ordering::by_length(true));
//! assert_eq!(numbers, [Number::from(4567_u64), Number::from(12_u64), Number::from(3_u64)]);
//! ```

use std::cmp::Ordering;

use crate::Number;

fn directed(ordering: Ordering, reversed: bool) -> Ordering {
    if reversed {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Orders numbers by digit count, breaking ties lexicographically by digit value.
///
/// This is the natural ordering of [`Number`]. With `reversed` set, the
/// longest numbers come first.
#[must_use]
pub fn by_length(reversed: bool) -> impl Fn(&Number, &Number) -> Ordering + Copy {
    move |a, b| directed(a.cmp(b), reversed)
}

/// Orders numbers by their count of distinct digit values.
///
/// Numbers with the same count compare equal, so a stable sort keeps them in
/// their original relative order.
#[must_use]
pub fn by_distinct_digit_count(reversed: bool) -> impl Fn(&Number, &Number) -> Ordering + Copy {
    move |a, b| {
        directed(
            a.distinct_digit_count().cmp(&b.distinct_digit_count()),
            reversed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[u64]) -> Vec<Number> {
        values.iter().copied().map(Number::from).collect()
    }

    #[test]
    fn test_by_length() {
        let mut numbers = nums(&[12, 3, 4567, 89, 5]);
        numbers.sort_by(by_length(false));
        assert_eq!(numbers, nums(&[3, 5, 12, 89, 4567]));
        numbers.sort_by(by_length(true));
        assert_eq!(numbers, nums(&[4567, 89, 12, 5, 3]));
    }

    #[test]
    fn test_by_distinct_digit_count_is_stable() {
        let mut numbers = nums(&[123, 11, 45, 7, 1000]);
        numbers.sort_by(by_distinct_digit_count(false));
        assert_eq!(numbers, nums(&[11, 7, 45, 1000, 123]));
        numbers.sort_by(by_distinct_digit_count(true));
        assert_eq!(numbers, nums(&[123, 45, 1000, 11, 7]));
    }
}
