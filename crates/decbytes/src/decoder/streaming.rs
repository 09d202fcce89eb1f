use std::borrow::Cow;

use tracing::trace;

use super::Decode;
use crate::{
    arena::{Arena, SharedArena, SharedState},
    buffer::OutputBuffer,
    digits::{Accumulator, SPACE},
    error::{DecodeError, FormatError},
    source::ByteSource,
};

/// Parse `source` byte by byte, reading through `input` until end-of-stream.
///
/// Each space completes the pending token and pushes one byte into `output`;
/// end-of-stream completes the last token if it has any digits. No token is
/// ever copied out of `input`, and nothing is allocated unless `output`
/// grows. Returns the number of input bytes consumed.
pub(crate) fn decode_stream<O: OutputBuffer + ?Sized>(
    source: &mut dyn ByteSource,
    input: &mut [u8],
    output: &mut O,
) -> Result<usize, DecodeError> {
    debug_assert!(!input.is_empty());
    output.clear();

    let mut acc = Accumulator::new();
    let mut token_start = 0;
    let mut consumed = 0;
    loop {
        let read = source.read_chunk(input)?;
        if read == 0 {
            break;
        }

        for (i, &byte) in input[..read].iter().enumerate() {
            let at = consumed + i;
            if byte == SPACE {
                let value = acc
                    .take()
                    .map_err(|kind| FormatError::new(token_start, kind))?;
                output.push(value)?;
                token_start = at + 1;
            } else {
                acc.push(byte).map_err(|kind| FormatError::new(at, kind))?;
            }
        }
        consumed += read;
    }

    if acc.is_pending() {
        let value = acc
            .take()
            .map_err(|kind| FormatError::new(token_start, kind))?;
        output.push(value)?;
    }
    Ok(consumed)
}

/// Parses the stream incrementally into the shared fixed output buffer.
///
/// Reads in chunks of [`SHARED_INPUT_CAPACITY`](crate::SHARED_INPUT_CAPACITY)
/// until end-of-stream, so input of any length is accepted. Output is capped
/// at [`SHARED_OUTPUT_CAPACITY`](crate::SHARED_OUTPUT_CAPACITY) bytes; longer
/// output fails with [`DecodeError::BufferOverflow`] rather than being cut.
/// O(n) in the input and allocation-free.
#[derive(Debug)]
pub struct StreamingFixedDecoder<'a> {
    arena: &'a mut SharedArena,
}

impl<'a> StreamingFixedDecoder<'a> {
    /// Decode through the buffers of `arena`.
    pub fn new(arena: &'a mut SharedArena) -> Self {
        Self { arena }
    }
}

impl Decode for StreamingFixedDecoder<'_> {
    fn decode<'b>(
        &'b mut self,
        source: &mut dyn ByteSource,
    ) -> Result<Cow<'b, [u8]>, DecodeError> {
        let SharedState {
            arena: Arena { input, output },
            ..
        } = self.arena.state();

        let read = decode_stream(source, input, output)?;
        trace!(
            strategy = "streaming_fixed",
            read,
            written = output.len(),
            "decoded"
        );
        Ok(Cow::Borrowed(output.as_slice()))
    }
}

/// Parses the stream incrementally into the shared growable output buffer.
///
/// Same parsing as [`StreamingFixedDecoder`] without an output ceiling. The
/// growable buffer is reset at the start of every call but keeps its
/// storage, so its capacity is the largest output decoded so far in this
/// process. That memory is never returned.
#[derive(Debug)]
pub struct StreamingDynamicDecoder<'a> {
    arena: &'a mut SharedArena,
}

impl<'a> StreamingDynamicDecoder<'a> {
    /// Decode through the buffers of `arena`.
    pub fn new(arena: &'a mut SharedArena) -> Self {
        Self { arena }
    }
}

impl Decode for StreamingDynamicDecoder<'_> {
    fn decode<'b>(
        &'b mut self,
        source: &mut dyn ByteSource,
    ) -> Result<Cow<'b, [u8]>, DecodeError> {
        let SharedState {
            arena: Arena { input, .. },
            dynamic,
        } = self.arena.state();

        let read = decode_stream(source, input, dynamic)?;
        trace!(
            strategy = "streaming_dynamic",
            read,
            written = dynamic.len(),
            capacity = dynamic.capacity(),
            "decoded"
        );
        Ok(Cow::Borrowed(dynamic.as_slice()))
    }
}
