use crate::{
    arena::{SHARED_INPUT_CAPACITY, SHARED_OUTPUT_CAPACITY},
    error::OptionsError,
};

/// Buffer sizes for decoders created by a
/// [`DecoderFactory`](crate::DecoderFactory).
///
/// # Examples
///
/// ```rust
/// use decbytes::{DecoderFactory, DecoderOptions};
///
/// let factory = DecoderFactory::new(DecoderOptions {
///     output_capacity: 1 << 16,
///     ..Default::default()
/// })?;
/// let decoder = factory.decoder();
/// assert_eq!(decoder.output_capacity(), 1 << 16);
/// # Ok::<(), decbytes::OptionsError>(())
/// ```
///
/// # Default
///
/// Both capacities default to the sizes of the process-wide buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Size of each read from the source.
    ///
    /// Smaller values mean more reads; the decoded output is the same.
    ///
    /// # Default
    ///
    /// [`SHARED_INPUT_CAPACITY`](crate::SHARED_INPUT_CAPACITY) (4096)
    pub input_capacity: usize,

    /// Maximum number of decoded bytes per call.
    ///
    /// Longer output fails with
    /// [`DecodeError::BufferOverflow`](crate::DecodeError::BufferOverflow).
    ///
    /// # Default
    ///
    /// [`SHARED_OUTPUT_CAPACITY`](crate::SHARED_OUTPUT_CAPACITY) (4096)
    pub output_capacity: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            input_capacity: SHARED_INPUT_CAPACITY,
            output_capacity: SHARED_OUTPUT_CAPACITY,
        }
    }
}

impl DecoderOptions {
    /// Check that both buffers can hold at least one byte.
    ///
    /// # Errors
    ///
    /// [`OptionsError`] naming the zero capacity.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.input_capacity == 0 {
            return Err(OptionsError::ZeroInputCapacity);
        }
        if self.output_capacity == 0 {
            return Err(OptionsError::ZeroOutputCapacity);
        }
        Ok(())
    }
}
