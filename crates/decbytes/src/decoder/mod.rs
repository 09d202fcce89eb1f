//! Decode strategies.
//!
//! All strategies accept the same input and produce the same output:
//!
//! - tokens are runs of ASCII digits separated by exactly one space;
//! - each token is a base-10 value in `0..=255` and becomes one output byte;
//! - a single trailing space is allowed and produces nothing;
//! - empty input produces empty output.
//!
//! They differ in how they read the source and where they put the result.
//! The split strategies ([`WholeInputDecoder`], [`SharedBufferDecoder`]) see
//! the complete input before parsing it; the streaming strategies parse each
//! byte as it arrives and never materialize a token.

mod shared;
mod streaming;
mod whole;

use std::borrow::Cow;

pub use shared::SharedBufferDecoder;
pub(crate) use streaming::decode_stream;
pub use streaming::{StreamingDynamicDecoder, StreamingFixedDecoder};
pub use whole::WholeInputDecoder;

use crate::{
    arena::SharedArena, error::DecodeError, factory::ConcurrentDecoder, source::ByteSource,
};

/// Decode a stream of space-separated decimal bytes.
pub trait Decode {
    /// Consume `source` to produce the bytes it encodes, in token order.
    ///
    /// Borrowed output points into buffers owned by the decoder (or by the
    /// [`SharedArena`] it was built from) and is overwritten by the next
    /// call.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Io`] if the source fails.
    /// - [`DecodeError::Format`] if the input is malformed.
    /// - [`DecodeError::BufferOverflow`] if a fixed-capacity output buffer
    ///   is too small.
    fn decode<'a>(&'a mut self, source: &mut dyn ByteSource)
    -> Result<Cow<'a, [u8]>, DecodeError>;
}

/// The available decode strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`WholeInputDecoder`].
    WholeInput,
    /// [`SharedBufferDecoder`].
    SharedBuffer,
    /// [`StreamingFixedDecoder`].
    StreamingFixed,
    /// [`StreamingDynamicDecoder`].
    StreamingDynamic,
    /// [`ConcurrentDecoder`].
    Concurrent,
}

impl Strategy {
    /// Every strategy, simplest first.
    pub const ALL: [Strategy; 5] = [
        Strategy::WholeInput,
        Strategy::SharedBuffer,
        Strategy::StreamingFixed,
        Strategy::StreamingDynamic,
        Strategy::Concurrent,
    ];

    /// Short lowercase name, for benchmark ids and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::WholeInput => "whole_input",
            Strategy::SharedBuffer => "shared_buffer",
            Strategy::StreamingFixed => "streaming_fixed",
            Strategy::StreamingDynamic => "streaming_dynamic",
            Strategy::Concurrent => "concurrent",
        }
    }

    /// Whether the strategy reads the source more than once.
    ///
    /// [`Strategy::SharedBuffer`] performs exactly one read and therefore
    /// requires the whole input to arrive in it.
    #[must_use]
    pub const fn reads_to_end(self) -> bool {
        !matches!(self, Strategy::SharedBuffer)
    }

    /// Whether the strategy's output has a fixed ceiling.
    #[must_use]
    pub const fn has_fixed_output(self) -> bool {
        matches!(
            self,
            Strategy::SharedBuffer | Strategy::StreamingFixed | Strategy::Concurrent
        )
    }

    /// Build a decoder for this strategy and pass it to `f`.
    ///
    /// Shared strategies acquire the [`SharedArena`] for the duration of `f`
    /// and wait for it if another owner holds it. Calling this from inside
    /// `f` for another shared strategy therefore never returns.
    pub fn with_decoder<R>(self, f: impl FnOnce(&mut dyn Decode) -> R) -> R {
        match self {
            Strategy::WholeInput => f(&mut WholeInputDecoder),
            Strategy::SharedBuffer => {
                let mut arena = SharedArena::acquire();
                f(&mut SharedBufferDecoder::new(&mut arena))
            }
            Strategy::StreamingFixed => {
                let mut arena = SharedArena::acquire();
                f(&mut StreamingFixedDecoder::new(&mut arena))
            }
            Strategy::StreamingDynamic => {
                let mut arena = SharedArena::acquire();
                f(&mut StreamingDynamicDecoder::new(&mut arena))
            }
            Strategy::Concurrent => f(&mut ConcurrentDecoder::new()),
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode `source` with `strategy` and return an owned copy of the output.
///
/// # Errors
///
/// See [`Decode::decode`].
pub fn decode_with(strategy: Strategy, source: &mut dyn ByteSource) -> Result<Vec<u8>, DecodeError> {
    strategy.with_decoder(|decoder| decoder.decode(source).map(Cow::into_owned))
}
