//! Text report over a populated [`NumberSequence`].

use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use cardinal_core::{MedianSide, Number, NumberSequence, SequenceError, ordering};

/// Errors that can occur while producing the report.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum ReportError {
    #[display("{_0}")]
    Sequence(#[from] SequenceError),
    #[display("failed to write report: {_0}")]
    Io(#[from] io::Error),
}

/// Renders numbers as `[a, b, c]`.
struct List<'a>(&'a [Number]);

impl Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, number) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(number, f)?;
        }
        f.write_str("]")
    }
}

/// Renders an optional number, or `none` when absent.
struct Maybe<'a>(Option<&'a Number>);

impl Display for Maybe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(number) => Display::fmt(number, f),
            None => f.write_str("none"),
        }
    }
}

/// Writes the full report for `seq` to `out`.
///
/// # Errors
///
/// Returns [`ReportError::Sequence`] if `seq` is empty, or
/// [`ReportError::Io`] if writing fails.
pub(crate) fn write_report<W>(out: &mut W, seq: &NumberSequence) -> Result<(), ReportError>
where
    W: Write + ?Sized,
{
    writeln!(out, "You entered list of {} numbers: {seq}", seq.len())?;
    writeln!(out)?;

    let shortest = seq.shortest()?;
    let longest = seq.longest()?;
    writeln!(
        out,
        "Shortest number {shortest} has {} digits.",
        shortest.len()
    )?;
    writeln!(
        out,
        "Longest number {longest} has {} digits.",
        longest.len()
    )?;
    writeln!(out)?;

    let ascending = seq.sorted_by(ordering::by_length(false));
    let descending = seq.sorted_by(ordering::by_length(true));
    writeln!(
        out,
        "List of numbers sorted by ascending length: {}",
        List(&ascending)
    )?;
    writeln!(
        out,
        "List of numbers sorted by descending length: {}",
        List(&descending)
    )?;
    writeln!(out)?;

    let shorter = seq.partition_by_median(MedianSide::Shorter)?;
    let longer = seq.partition_by_median(MedianSide::Longer)?;
    writeln!(out, "Median number length: {}", seq.median_length()?)?;
    writeln!(
        out,
        "List of numbers shorter than median: {}",
        List(&shorter)
    )?;
    writeln!(out, "List of numbers longer than median: {}", List(&longer))?;
    writeln!(out)?;

    let by_distinct = seq.sorted_by(ordering::by_distinct_digit_count(false));
    writeln!(
        out,
        "First number that has minimal set of different digits: {}",
        Maybe(by_distinct.first())
    )?;
    writeln!(out)?;

    let even = seq.filter(Number::has_only_even_digits);
    let balanced = seq.filter(Number::has_equal_even_odd_counts);
    writeln!(
        out,
        "Quantity of numbers that comprise only even digits: {} {}",
        even.len(),
        List(even.as_slice())
    )?;
    writeln!(
        out,
        "Numbers that comprise same quantity of even and odd digits: {} {}",
        balanced.len(),
        List(balanced.as_slice())
    )?;
    writeln!(out)?;

    let ascending_digits = seq.filter(Number::is_ascending);
    let descending_digits = seq.filter(Number::is_descending);
    writeln!(
        out,
        "First number with ascending digits: {}",
        Maybe(ascending_digits.first())
    )?;
    writeln!(
        out,
        "First number with descending digits: {}",
        Maybe(descending_digits.first())
    )?;
    writeln!(out)?;

    let unique = seq.filter(Number::has_only_unique_digits);
    writeln!(
        out,
        "First number composed of unique digits: {}",
        Maybe(unique.first())
    )?;
    writeln!(out)?;

    let palindromes = seq.filter(Number::is_palindrome);
    writeln!(
        out,
        "Second or only one palindrome number: {}",
        Maybe(palindromes.second_or_only_one())
    )?;

    log::debug!("report written for {} numbers", seq.len());
    Ok(())
}
