use std::borrow::Cow;

use bstr::ByteSlice;
use tracing::trace;

use super::Decode;
use crate::{
    buffer::OutputBuffer,
    digits::{SPACE, parse_token},
    error::{DecodeError, FormatError, FormatErrorKind},
    source::{ByteSource, read_all},
};

/// Reads the whole source, splits it into tokens, and parses each one.
///
/// This is the baseline: it has no size limit beyond available memory and
/// holds no state between calls, at the cost of allocating the complete
/// input, the token list, and the output on every call. The output is
/// returned owned.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeInputDecoder;

impl Decode for WholeInputDecoder {
    fn decode<'a>(
        &'a mut self,
        source: &mut dyn ByteSource,
    ) -> Result<Cow<'a, [u8]>, DecodeError> {
        let input = read_all(source)?;
        let tokens: Vec<&[u8]> = match token_body(&input)? {
            Some(body) => body.split_str(" ").collect(),
            None => Vec::new(),
        };

        let mut output = Vec::with_capacity(tokens.len());
        let mut offset = 0;
        for token in tokens {
            output.push(parse_token(token, offset)?);
            offset += token.len() + 1;
        }

        trace!(
            strategy = "whole_input",
            read = input.len(),
            written = output.len(),
            "decoded"
        );
        Ok(Cow::Owned(output))
    }
}

/// Split `input` on single spaces and parse every token into `output`.
///
/// `input` is everything the caller has; a trailing space ends the last
/// token without starting another.
pub(crate) fn split_tokens<O: OutputBuffer + ?Sized>(
    input: &[u8],
    output: &mut O,
) -> Result<(), DecodeError> {
    output.clear();
    let Some(body) = token_body(input)? else {
        return Ok(());
    };

    let mut offset = 0;
    for token in body.split_str(" ") {
        output.push(parse_token(token, offset)?)?;
        offset += token.len() + 1;
    }
    Ok(())
}

/// The part of `input` that holds tokens, or `None` for empty input.
fn token_body(input: &[u8]) -> Result<Option<&[u8]>, FormatError> {
    if input.is_empty() {
        return Ok(None);
    }
    match input.strip_suffix(&[SPACE]) {
        Some([]) => Err(FormatError::new(0, FormatErrorKind::EmptyToken)),
        Some(body) => Ok(Some(body)),
        None => Ok(Some(input)),
    }
}
