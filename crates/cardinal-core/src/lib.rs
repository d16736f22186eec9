//! Core data structures for inspecting sequences of cardinal numbers.
//!
//! This crate models a non-negative integer as an ordered sequence of decimal
//! digits and provides a collection type with sorting, filtering, and
//! median-based queries over such numbers.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of decimal digits 0-9
//! - [`number`]: [`Number`], an immutable digit sequence with digit-level predicates
//! - [`number_sequence`]: [`NumberSequence`], an ordered collection of numbers and
//!   the queries run over it
//! - [`ordering`]: Comparators used to sort numbers by length or by distinct digit count
//!
//! # Examples
//!
//! ```
//! use cardinal_core::{Number, NumberSequence, ordering};
//!
//! let seq: NumberSequence = [12_u64, 3, 4567, 89, 5].into_iter().map(Number::from).collect();
//!
//! let sorted = seq.sorted_by(ordering::by_length(false));
//! assert_eq!(sorted.first(), Some(&Number::from(3_u64)));
//!
//! let palindrome = seq.filter(Number::is_palindrome).second_or_only_one().cloned();
//! assert_eq!(palindrome, Some(Number::from(5_u64)));
//! ```

pub mod digit;
mod error;
pub mod number;
pub mod number_sequence;
pub mod ordering;

pub use self::{
    digit::Digit,
    error::{NumberError, SequenceError},
    number::Number,
    number_sequence::{MedianRange, MedianSide, NumberSequence},
};
