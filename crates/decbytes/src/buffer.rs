//! Output buffers.
//!
//! Decoders write through [`OutputBuffer`] so that one parsing loop serves
//! both the fixed-capacity and the growable variant.
//!
//! - [`FixedBuffer`] never reallocates. Pushing past its capacity is a
//!   [`DecodeError::BufferOverflow`].
//! - [`GrowableBuffer`] grows geometrically and never shrinks. Its capacity is
//!   a high-water mark: after a large decode, every later decode up to that
//!   size runs without touching the allocator.

use tracing::debug;

use crate::error::DecodeError;

/// Destination of decoded bytes for a single call.
pub(crate) trait OutputBuffer {
    /// Logically empty the buffer. Storage is kept.
    fn clear(&mut self);

    fn push(&mut self, byte: u8) -> Result<(), DecodeError>;
}

/// A byte region with a fixed capacity.
#[derive(Debug, Clone)]
pub struct FixedBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl FixedBuffer {
    /// Allocate a zeroed buffer holding up to `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Maximum number of bytes the buffer holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes written since the last clear.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing was written since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The written bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl OutputBuffer for FixedBuffer {
    fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), DecodeError> {
        let Some(slot) = self.data.get_mut(self.len) else {
            return Err(DecodeError::BufferOverflow {
                capacity: self.data.len(),
            });
        };
        *slot = byte;
        self.len += 1;
        Ok(())
    }
}

/// An append-only byte array that grows geometrically and never shrinks.
///
/// Length and capacity are tracked separately. [`reset`](Self::reset) drops
/// the content but keeps the allocation, so capacity only ever increases.
/// Whenever an append would exceed capacity the buffer at least doubles,
/// which keeps appends amortized O(1) and bounds the number of
/// reallocations for `n` appended bytes by O(log n).
#[derive(Debug, Clone, Default)]
pub struct GrowableBuffer {
    data: Vec<u8>,
    reallocations: usize,
}

impl GrowableBuffer {
    /// Smallest capacity allocated on first growth.
    pub const MIN_CAPACITY: usize = 64;

    /// An empty buffer that has not allocated yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer with room for at least `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            reallocations: 0,
        }
    }

    /// Number of bytes currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes the buffer can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// How many times the buffer has grown since it was created.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// The current content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Truncate to zero length without releasing storage.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Append one byte, growing if the buffer is full.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        if self.data.len() == self.data.capacity() {
            self.grow(1);
        }
        self.data.push(byte);
    }

    /// Append `bytes`, growing at most once.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        if self.data.capacity() - self.data.len() < bytes.len() {
            self.grow(bytes.len());
        }
        self.data.extend_from_slice(bytes);
    }

    #[cold]
    fn grow(&mut self, additional: usize) {
        let len = self.data.len();
        let doubled = self.data.capacity().saturating_mul(2);
        let target = doubled.max(Self::MIN_CAPACITY).max(len + additional);
        self.data.reserve_exact(target - len);
        self.reallocations += 1;
        debug!(
            capacity = self.data.capacity(),
            reallocations = self.reallocations,
            "grew output buffer"
        );
    }
}

impl OutputBuffer for GrowableBuffer {
    fn clear(&mut self) {
        self.reset();
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), DecodeError> {
        GrowableBuffer::push(self, byte);
        Ok(())
    }
}

impl OutputBuffer for Vec<u8> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), DecodeError> {
        Vec::push(self, byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_buffer_fills_to_capacity() {
        let mut buf = FixedBuffer::new(3);
        for byte in [1, 2, 3] {
            OutputBuffer::push(&mut buf, byte).unwrap();
        }
        assert_eq!(buf.as_slice(), &[1, 2, 3]);

        let err = OutputBuffer::push(&mut buf, 4).unwrap_err();
        assert!(matches!(err, DecodeError::BufferOverflow { capacity: 3 }));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn fixed_buffer_clear_is_logical() {
        let mut buf = FixedBuffer::new(2);
        OutputBuffer::push(&mut buf, 9).unwrap();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn growable_buffer_grows_logarithmically() {
        let mut buf = GrowableBuffer::new();
        let n = 1 << 20;
        for i in 0..n {
            buf.push((i % 251) as u8);
        }
        assert_eq!(buf.len(), n);
        // 64 << 14 == 1 << 20
        assert!(
            buf.reallocations() <= 15,
            "{} reallocations",
            buf.reallocations()
        );
    }

    #[test]
    fn growable_buffer_retains_capacity_across_reset() {
        let mut buf = GrowableBuffer::new();
        buf.extend_from_slice(&[7; 1000]);
        let capacity = buf.capacity();
        let reallocations = buf.reallocations();

        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), capacity);

        for _ in 0..1000 {
            buf.push(1);
        }
        assert_eq!(buf.capacity(), capacity);
        assert_eq!(buf.reallocations(), reallocations);
    }

    #[test]
    fn growable_buffer_at_least_doubles() {
        let mut buf = GrowableBuffer::with_capacity(100);
        buf.extend_from_slice(&[0; 100]);
        buf.push(0);
        assert!(buf.capacity() >= 200);
        assert_eq!(buf.reallocations(), 1);
    }
}
