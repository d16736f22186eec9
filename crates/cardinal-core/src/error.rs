use std::io;

/// Errors produced while building a [`Digit`](crate::Digit) or a [`Number`](crate::Number).
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum NumberError {
    /// A negative integer was supplied where a cardinal number is required.
    #[display("only non-negative numbers are allowed, got {token}")]
    Negative {
        /// The rejected value, in its decimal form.
        token: String,
    },
    /// The input token is not a base-10 integer.
    #[display("malformed number: {token:?}")]
    Malformed {
        /// The offending token.
        token: String,
    },
    /// A digit value outside the range 0-9.
    #[display("digit must be in the range 0-9, got {value}")]
    InvalidDigit {
        /// The rejected value.
        value: u8,
    },
}

/// Errors produced by [`NumberSequence`](crate::NumberSequence) operations.
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum SequenceError {
    /// The input contained a value that is not a valid cardinal number.
    #[display("invalid input: {_0}")]
    #[from(skip)]
    InvalidInput(NumberError),
    /// The input contained a token that is not an integer.
    #[display("malformed input: {token:?} is not an integer")]
    Malformed {
        /// The offending token.
        token: String,
    },
    /// The input ended before the target size was reached.
    #[display("expected {expected} numbers, but input ended after {found}")]
    InsufficientInput {
        /// The number of entries requested.
        expected: usize,
        /// The number of entries actually read.
        found: usize,
    },
    /// The query requires at least one entry.
    #[display("sequence is empty")]
    EmptySequence,
    /// The sequence has already been populated.
    #[display("sequence is already populated")]
    AlreadyPopulated,
    /// Reading the input failed.
    #[display("failed to read input: {_0}")]
    Io(#[from] io::Error),
}

impl From<NumberError> for SequenceError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::Malformed { token } => Self::Malformed { token },
            err => Self::InvalidInput(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(err: NumberError) -> Result<(), SequenceError> {
        let result: Result<(), NumberError> = Err(err);
        result?;
        Ok(())
    }

    #[test]
    fn test_number_error_conversion() {
        let err = convert(NumberError::Malformed {
            token: "two".to_owned(),
        })
        .unwrap_err();
        assert!(matches!(err, SequenceError::Malformed { ref token } if token == "two"));

        let negative = NumberError::Negative {
            token: "-2".to_owned(),
        };
        let err = convert(negative.clone()).unwrap_err();
        assert!(matches!(err, SequenceError::InvalidInput(ref inner) if *inner == negative));

        let err = convert(NumberError::InvalidDigit { value: 12 }).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_io_error_conversion() {
        let err = SequenceError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(err.is_io());
        assert!(err.to_string().starts_with("failed to read input: "));
    }
}
