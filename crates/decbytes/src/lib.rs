//! Decoders for streams of space-separated decimal bytes.
//!
//! The text `"79 75"` decodes to the two bytes of `"OK"`. Every decoder in
//! this crate implements the same [`Decode`] contract and differs only in who
//! owns the buffers it reads into and writes to:
//!
//! | decoder                     | input buffer       | output buffer              | output   |
//! |-----------------------------|--------------------|----------------------------|----------|
//! | [`WholeInputDecoder`]       | allocated per call | allocated per call         | owned    |
//! | [`SharedBufferDecoder`]     | [`SharedArena`]    | [`SharedArena`], fixed     | borrowed |
//! | [`StreamingFixedDecoder`]   | [`SharedArena`]    | [`SharedArena`], fixed     | borrowed |
//! | [`StreamingDynamicDecoder`] | [`SharedArena`]    | [`SharedArena`], growable  | borrowed |
//! | [`ConcurrentDecoder`]       | owned by decoder   | owned by decoder, fixed    | borrowed |
//!
//! The process-wide buffers live behind [`SharedArena`], which a caller must
//! acquire before building any of the shared decoders. Only one owner may
//! hold it at a time. [`DecoderFactory`] hands out decoders with private
//! buffers instead, so any number of them may run concurrently.
//!
//! ```rust
//! use decbytes::{ConcurrentDecoder, Decode};
//!
//! let mut decoder = ConcurrentDecoder::new();
//! let mut input: &[u8] = b"79 75";
//! assert_eq!(&*decoder.decode(&mut input)?, b"OK");
//! # Ok::<(), decbytes::DecodeError>(())
//! ```

mod arena;
mod buffer;
mod decoder;
mod digits;
mod error;
mod factory;
mod options;
mod source;

#[cfg(test)]
mod tests;

pub use arena::{SHARED_INPUT_CAPACITY, SHARED_OUTPUT_CAPACITY, SharedArena};
pub use buffer::{FixedBuffer, GrowableBuffer};
pub use decoder::{
    Decode, SharedBufferDecoder, Strategy, StreamingDynamicDecoder, StreamingFixedDecoder,
    WholeInputDecoder, decode_with,
};
pub use error::{AcquireError, DecodeError, FormatError, FormatErrorKind, OptionsError};
pub use factory::{ConcurrentDecoder, DecoderFactory};
pub use options::DecoderOptions;
pub use source::{ByteSource, ChunkedSource, read_all};
