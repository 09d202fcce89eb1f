use std::borrow::Cow;

use tracing::trace;

use crate::{
    arena::Arena,
    decoder::{Decode, decode_stream},
    error::{DecodeError, OptionsError},
    options::DecoderOptions,
    source::ByteSource,
};

/// Produces [`ConcurrentDecoder`]s with validated buffer sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderFactory {
    options: DecoderOptions,
}

impl DecoderFactory {
    /// A factory for decoders sized by `options`.
    ///
    /// # Errors
    ///
    /// [`OptionsError`] if either capacity is zero.
    pub fn new(options: DecoderOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options every produced decoder is sized by.
    #[must_use]
    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Allocate a fresh pair of private buffers and bind a decoder to them.
    #[must_use]
    pub fn decoder(&self) -> ConcurrentDecoder {
        ConcurrentDecoder {
            arena: Arena::new(self.options.input_capacity, self.options.output_capacity),
        }
    }
}

/// A streaming decoder that owns its input and output buffers.
///
/// Parses exactly like [`StreamingFixedDecoder`](crate::StreamingFixedDecoder)
/// but shares nothing: two `ConcurrentDecoder`s never touch the same memory,
/// so each can be moved to its own thread and driven there without locks.
/// Repeated calls on one decoder reuse its buffers and allocate nothing.
///
/// ```rust
/// use std::thread;
///
/// use decbytes::{ConcurrentDecoder, Decode};
///
/// thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| {
///             let mut decoder = ConcurrentDecoder::new();
///             let mut input: &[u8] = b"76 111 114 101 109";
///             assert_eq!(&*decoder.decode(&mut input).unwrap(), b"Lorem");
///         });
///     }
/// });
/// ```
#[derive(Debug)]
pub struct ConcurrentDecoder {
    arena: Arena,
}

impl ConcurrentDecoder {
    /// A decoder with default-sized buffers.
    #[must_use]
    pub fn new() -> Self {
        DecoderFactory::default().decoder()
    }

    /// Capacity of the private input buffer.
    #[must_use]
    pub fn input_capacity(&self) -> usize {
        self.arena.input.len()
    }

    /// Capacity of the private output buffer.
    #[must_use]
    pub fn output_capacity(&self) -> usize {
        self.arena.output.capacity()
    }
}

impl Default for ConcurrentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decode for ConcurrentDecoder {
    fn decode<'a>(
        &'a mut self,
        source: &mut dyn ByteSource,
    ) -> Result<Cow<'a, [u8]>, DecodeError> {
        let Arena { input, output } = &mut self.arena;
        let read = decode_stream(source, input, output)?;
        trace!(
            strategy = "concurrent",
            read,
            written = output.len(),
            "decoded"
        );
        Ok(Cow::Borrowed(output.as_slice()))
    }
}
