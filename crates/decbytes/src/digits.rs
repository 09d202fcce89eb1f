//! ASCII digit accumulation shared by every decoder.

use crate::error::{FormatError, FormatErrorKind};

/// The only delimiter between tokens.
pub(crate) const SPACE: u8 = b' ';

/// A single `u8` value built one ASCII digit at a time.
///
/// `pending` distinguishes the literal token `0` from "no digits yet", so a
/// trailing `0` at end-of-stream still produces a byte while a trailing
/// delimiter does not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Accumulator {
    value: u16,
    pending: bool,
}

impl Accumulator {
    pub(crate) const fn new() -> Self {
        Self {
            value: 0,
            pending: false,
        }
    }

    /// Append one digit. The value must still fit in a `u8` afterwards.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), FormatErrorKind> {
        let digit = byte.wrapping_sub(b'0');
        if digit > 9 {
            return Err(FormatErrorKind::InvalidDigit(byte));
        }
        let value = self.value * 10 + u16::from(digit);
        if value > u16::from(u8::MAX) {
            return Err(FormatErrorKind::OutOfRange);
        }
        self.value = value;
        self.pending = true;
        Ok(())
    }

    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    /// Complete the current token and reset for the next one.
    #[inline]
    pub(crate) fn take(&mut self) -> Result<u8, FormatErrorKind> {
        if !self.pending {
            return Err(FormatErrorKind::EmptyToken);
        }
        let byte = u8::try_from(self.value).map_err(|_| FormatErrorKind::OutOfRange)?;
        *self = Self::new();
        Ok(byte)
    }
}

/// Parse one complete token starting at `offset` in the input.
pub(crate) fn parse_token(token: &[u8], offset: usize) -> Result<u8, FormatError> {
    let mut acc = Accumulator::new();
    for (i, &byte) in token.iter().enumerate() {
        acc.push(byte)
            .map_err(|kind| FormatError::new(offset + i, kind))?;
    }
    acc.take().map_err(|kind| FormatError::new(offset, kind))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"0", 0)]
    #[case(b"7", 7)]
    #[case(b"42", 42)]
    #[case(b"255", 255)]
    #[case(b"007", 7)]
    #[case(b"0000000000255", 255)]
    fn parses_valid_tokens(#[case] token: &[u8], #[case] expected: u8) {
        assert_eq!(parse_token(token, 0), Ok(expected));
    }

    #[rstest]
    #[case(b"256", 2, FormatErrorKind::OutOfRange)]
    #[case(b"1000", 3, FormatErrorKind::OutOfRange)]
    #[case(b"", 0, FormatErrorKind::EmptyToken)]
    #[case(b"4a", 1, FormatErrorKind::InvalidDigit(b'a'))]
    #[case(b"-1", 0, FormatErrorKind::InvalidDigit(b'-'))]
    #[case(b"+1", 0, FormatErrorKind::InvalidDigit(b'+'))]
    #[case(b"1\n", 1, FormatErrorKind::InvalidDigit(b'\n'))]
    fn rejects_malformed_tokens(
        #[case] token: &[u8],
        #[case] at: usize,
        #[case] kind: FormatErrorKind,
    ) {
        assert_eq!(parse_token(token, 10), Err(FormatError::new(10 + at, kind)));
    }

    #[test]
    fn accumulator_resets_after_take() {
        let mut acc = Accumulator::new();
        assert!(!acc.is_pending());
        acc.push(b'2').unwrap();
        acc.push(b'5').unwrap();
        assert!(acc.is_pending());
        assert_eq!(acc.take(), Ok(25));
        assert!(!acc.is_pending());
        assert_eq!(acc.take(), Err(FormatErrorKind::EmptyToken));
    }

    #[test]
    fn zero_is_pending() {
        let mut acc = Accumulator::new();
        acc.push(b'0').unwrap();
        assert!(acc.is_pending());
        assert_eq!(acc.take(), Ok(0));
    }

    #[test]
    fn failed_push_keeps_value() {
        let mut acc = Accumulator::new();
        acc.push(b'9').unwrap();
        acc.push(b'9').unwrap();
        assert_eq!(acc.push(b'9'), Err(FormatErrorKind::OutOfRange));
        assert_eq!(acc.take(), Ok(99));
    }
}
