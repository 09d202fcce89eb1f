use std::borrow::Cow;

use tracing::{trace, warn};

use super::{Decode, whole::split_tokens};
use crate::{
    arena::{Arena, SharedArena, SharedState},
    error::DecodeError,
    source::ByteSource,
};

/// Reads once into the shared input buffer, then splits and parses.
///
/// No allocation happens per call: input and output live in the
/// [`SharedArena`]. The returned view borrows the decoder and is valid until
/// its next call.
///
/// # Single read
///
/// The decoder calls [`ByteSource::read_chunk`] exactly once, with a buffer of
/// [`SHARED_INPUT_CAPACITY`](crate::SHARED_INPUT_CAPACITY) bytes. The caller
/// must guarantee that the whole input fits and arrives in that one read;
/// anything the source holds back is silently ignored and the last token may
/// be cut short. A read that fills the buffer completely is logged as a
/// possible truncation. Use [`StreamingFixedDecoder`](crate::StreamingFixedDecoder)
/// for sources that deliver input in several reads.
#[derive(Debug)]
pub struct SharedBufferDecoder<'a> {
    arena: &'a mut SharedArena,
}

impl<'a> SharedBufferDecoder<'a> {
    /// Decode through the buffers of `arena`.
    pub fn new(arena: &'a mut SharedArena) -> Self {
        Self { arena }
    }
}

impl Decode for SharedBufferDecoder<'_> {
    fn decode<'b>(
        &'b mut self,
        source: &mut dyn ByteSource,
    ) -> Result<Cow<'b, [u8]>, DecodeError> {
        let SharedState {
            arena: Arena { input, output },
            ..
        } = self.arena.state();

        let read = source.read_chunk(input)?;
        if read == input.len() {
            warn!(
                capacity = input.len(),
                "single read filled the shared input buffer; input may be truncated"
            );
        }

        split_tokens(&input[..read], output)?;

        trace!(
            strategy = "shared_buffer",
            read,
            written = output.len(),
            "decoded"
        );
        Ok(Cow::Borrowed(output.as_slice()))
    }
}
