//! An ordered collection of [`Number`] values and the queries run over it.
//!
//! A [`NumberSequence`] has two phases. It starts empty with a target size,
//! is populated once by [`NumberSequence::read`], and is then only queried.
//! Every query returns a new value; the insertion order of the sequence is
//! never changed.
//!
//! # Examples
//!
//! ```
//! use cardinal_core::{MedianSide, Number, NumberSequence};
//!
//! let mut seq = NumberSequence::new(5);
//! seq.read("12 3 4567\n89 5\n".as_bytes(), None)?;
//! assert_eq!(seq.to_string(), "12, 3, 4567, 89, 5");
//!
//! assert_eq!(seq.shortest()?.to_string(), "3");
//! assert_eq!(seq.longest()?.to_string(), "4567");
//! assert_eq!(seq.median_length()?, 2);
//!
//! let shorter = seq.partition_by_median(MedianSide::Shorter)?;
//! assert_eq!(shorter, [Number::from(3_u64), Number::from(5_u64)]);
//!
//! let even = seq.filter(Number::has_only_even_digits);
//! assert!(even.is_empty());
//! # Ok::<(), cardinal_core::SequenceError>(())
//! ```

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    io::{BufRead, Write},
    slice,
};

use crate::{Number, SequenceError, ordering};

/// Inclusive index pair into the length-sorted view of a sequence.
///
/// Produced by [`NumberSequence::median_range`]; it spans every entry whose
/// length equals the median length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MedianRange {
    start: usize,
    end: usize,
}

impl MedianRange {
    /// Returns the first index of the block.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Returns the last index of the block (inclusive).
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns the number of entries in the block. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }
}

/// Which side of the median block [`NumberSequence::partition_by_median`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianSide {
    /// Entries sorted before the median block.
    Shorter,
    /// Entries sorted after the median block.
    Longer,
}

/// An ordered collection of numbers with a declared target size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSequence {
    target_size: usize,
    numbers: Vec<Number>,
}

impl NumberSequence {
    /// Creates an empty sequence that expects `target_size` entries.
    ///
    /// The target size is the number of entries [`read`](Self::read) consumes.
    /// It is not a limit on the collection.
    #[must_use]
    pub fn new(target_size: usize) -> Self {
        Self {
            target_size,
            numbers: Vec::with_capacity(target_size),
        }
    }

    /// Populates the sequence from whitespace- or line-delimited integer tokens.
    ///
    /// Exactly `target_size` tokens are consumed. Tokens after the last one
    /// needed on the same line are ignored. If `prompt` is given, a request for
    /// input is written to it first.
    ///
    /// The sequence is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::AlreadyPopulated`] if the sequence already holds entries.
    /// - [`SequenceError::InvalidInput`] if a token is a negative integer.
    /// - [`SequenceError::Malformed`] if a token is not an integer.
    /// - [`SequenceError::InsufficientInput`] if the input ends early.
    /// - [`SequenceError::Io`] if reading the input or writing the prompt fails.
    pub fn read<R>(
        &mut self,
        mut reader: R,
        prompt: Option<&mut dyn Write>,
    ) -> Result<(), SequenceError>
    where
        R: BufRead,
    {
        if !self.numbers.is_empty() {
            return Err(SequenceError::AlreadyPopulated);
        }
        if let Some(out) = prompt {
            write!(out, "Please enter {} cardinal numbers: ", self.target_size)?;
            out.flush()?;
        }

        let mut numbers = Vec::with_capacity(self.target_size);
        let mut line = String::new();
        while numbers.len() < self.target_size {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(SequenceError::InsufficientInput {
                    expected: self.target_size,
                    found: numbers.len(),
                });
            }
            let wanted = self.target_size - numbers.len();
            for token in line.split_whitespace().take(wanted) {
                log::trace!("parsing token {token:?}");
                numbers.push(token.parse::<Number>()?);
            }
        }

        log::debug!("read {} numbers", numbers.len());
        self.numbers = numbers;
        Ok(())
    }

    /// Returns the number of entries the sequence was created to hold.
    #[must_use]
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns `true` if the sequence holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Number] {
        &self.numbers
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Number> {
        self.numbers.iter()
    }

    /// Returns a copy of the entries sorted by `compare`.
    ///
    /// The sort is stable, so entries that compare equal keep their insertion
    /// order.
    #[must_use]
    pub fn sorted_by<F>(&self, compare: F) -> Vec<Number>
    where
        F: FnMut(&Number, &Number) -> Ordering,
    {
        let mut sorted = self.numbers.clone();
        sorted.sort_by(compare);
        sorted
    }

    /// Returns the entries sorted by `compare` with duplicates removed.
    ///
    /// Entries that compare equal under `compare` are collapsed into the one
    /// inserted first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardinal_core::{NumberSequence, ordering};
    ///
    /// let seq: NumberSequence = [12_u64, 3, 45, 3].into_iter().map(Into::into).collect();
    /// let by_length = seq.sorted_unique_by(ordering::by_length(false));
    /// assert_eq!(by_length.len(), 3);
    ///
    /// // 12 and 45 both have two distinct digits; 12 was inserted first.
    /// let by_distinct = seq.sorted_unique_by(ordering::by_distinct_digit_count(false));
    /// assert_eq!(by_distinct.iter().map(ToString::to_string).collect::<Vec<_>>(), ["3", "12"]);
    /// ```
    #[must_use]
    pub fn sorted_unique_by<F>(&self, mut compare: F) -> Vec<Number>
    where
        F: FnMut(&Number, &Number) -> Ordering,
    {
        let mut sorted = self.sorted_by(&mut compare);
        sorted.dedup_by(|later, earlier| compare(earlier, later) == Ordering::Equal);
        sorted
    }

    fn length_sorted(&self) -> Vec<Number> {
        self.sorted_by(ordering::by_length(false))
    }

    /// Returns the shortest entry.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn shortest(&self) -> Result<&Number, SequenceError> {
        self.numbers.iter().min().ok_or(SequenceError::EmptySequence)
    }

    /// Returns the longest entry.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn longest(&self) -> Result<&Number, SequenceError> {
        self.numbers.iter().max().ok_or(SequenceError::EmptySequence)
    }

    /// Returns the lower-median position, `len() / 2`.
    #[must_use]
    pub fn median_index(&self) -> usize {
        self.numbers.len() / 2
    }

    /// Returns the length of the entry at [`median_index`](Self::median_index)
    /// in the length-sorted view.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn median_length(&self) -> Result<usize, SequenceError> {
        self.length_sorted()
            .get(self.median_index())
            .map(Number::len)
            .ok_or(SequenceError::EmptySequence)
    }

    /// Returns the block of the length-sorted view whose entries share the
    /// median length.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn median_range(&self) -> Result<MedianRange, SequenceError> {
        median_range_in(&self.length_sorted(), self.median_index())
    }

    /// Returns the length-sorted entries on one side of the median block.
    ///
    /// The median block itself belongs to neither side, so the two sides and
    /// the block together cover the whole sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn partition_by_median(&self, side: MedianSide) -> Result<Vec<Number>, SequenceError> {
        let mut sorted = self.length_sorted();
        let range = median_range_in(&sorted, self.median_index())?;
        let part = match side {
            MedianSide::Shorter => {
                sorted.truncate(range.start);
                sorted
            }
            MedianSide::Longer => sorted.split_off(range.end + 1),
        };
        Ok(part)
    }

    /// Returns a new sequence with the entries matching `predicate`, in order.
    ///
    /// The target size of the result equals its length.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Number) -> bool,
    {
        self.numbers
            .iter()
            .filter(|&number| predicate(number))
            .cloned()
            .collect()
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<&Number> {
        self.numbers.first()
    }

    /// Returns the second entry, or the only entry of a one-element sequence.
    #[must_use]
    pub fn second_or_only_one(&self) -> Option<&Number> {
        self.numbers.get(1).or_else(|| self.numbers.first())
    }
}

fn median_range_in(sorted: &[Number], index: usize) -> Result<MedianRange, SequenceError> {
    let median_len = sorted.get(index).ok_or(SequenceError::EmptySequence)?.len();

    let mut start = index;
    while start > 0 && sorted[start - 1].len() == median_len {
        start -= 1;
    }
    let mut end = index;
    while end + 1 < sorted.len() && sorted[end + 1].len() == median_len {
        end += 1;
    }
    Ok(MedianRange { start, end })
}

impl From<Vec<Number>> for NumberSequence {
    fn from(numbers: Vec<Number>) -> Self {
        Self {
            target_size: numbers.len(),
            numbers,
        }
    }
}

impl FromIterator<Number> for NumberSequence {
    fn from_iter<T: IntoIterator<Item = Number>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a NumberSequence {
    type Item = &'a Number;
    type IntoIter = slice::Iter<'a, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(number, f)?;
        }
        Ok(())
    }
}
