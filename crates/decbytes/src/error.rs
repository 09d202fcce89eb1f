use std::io;

use thiserror::Error;

/// Failure of a single decode call.
///
/// No decoder returns partial output alongside an error. Whatever a decoder
/// wrote into its buffers before failing is overwritten by the next call.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Reading the byte source failed. The source's error is passed through
    /// unchanged.
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    /// The input is malformed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// The decoded output does not fit in a fixed-capacity output buffer.
    #[error("output exceeds buffer capacity of {capacity} bytes")]
    BufferOverflow {
        /// Capacity of the output buffer that overflowed.
        capacity: usize,
    },
}

impl DecodeError {
    /// Whether the error was caused by the input itself rather than by the
    /// source or the decoder's buffers. Retrying such input never succeeds.
    #[must_use]
    pub fn is_input_defect(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// The format error, if this is one.
    #[must_use]
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

/// A malformed token, located by byte offset into the decoded input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct FormatError {
    /// Offset of the offending byte. For [`FormatErrorKind::EmptyToken`] this
    /// is where the empty token starts.
    pub offset: usize,
    /// What is wrong at `offset`.
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) const fn new(offset: usize, kind: FormatErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Reason a token failed to parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// A byte that is neither an ASCII digit nor the space delimiter.
    #[error("invalid digit '{}'", .0.escape_ascii())]
    InvalidDigit(u8),
    /// The token's value is greater than 255.
    #[error("value exceeds 255")]
    OutOfRange,
    /// Two adjacent delimiters, or a delimiter at the start of the input.
    #[error("empty token")]
    EmptyToken,
}

/// The process-wide [`SharedArena`](crate::SharedArena) could not be acquired.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireError {
    /// Another owner currently holds the arena.
    #[error("shared arena is held by another owner")]
    Busy,
}

/// Rejected [`DecoderOptions`](crate::DecoderOptions).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    /// An input buffer that holds no bytes can never make progress.
    #[error("input capacity must be non-zero")]
    ZeroInputCapacity,
    /// An output buffer that holds no bytes rejects every non-empty input.
    #[error("output capacity must be non-zero")]
    ZeroOutputCapacity,
}
