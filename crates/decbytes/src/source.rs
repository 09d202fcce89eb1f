//! Byte-stream sources.

use std::io::{self, ErrorKind, Read};

/// A readable byte stream consumed in chunks.
///
/// Decoders only ever call [`read_chunk`](Self::read_chunk); they never seek,
/// rewind, or otherwise touch the source. Every [`std::io::Read`] is a
/// `ByteSource`.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes into the front of `buf` and return how
    /// many were written.
    ///
    /// `Ok(0)` for a non-empty `buf` signals end-of-stream. A source that
    /// needs cancellation can return an error here; the decoder propagates
    /// it unchanged and abandons the call.
    ///
    /// # Errors
    ///
    /// Any I/O error of the underlying stream.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<R: Read + ?Sized> ByteSource for R {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.read(buf) {
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                result => return result,
            }
        }
    }
}

/// Read `source` to end-of-stream into a freshly allocated vector.
///
/// # Errors
///
/// The first error returned by `source`.
pub fn read_all(source: &mut dyn ByteSource) -> io::Result<Vec<u8>> {
    const CHUNK: usize = 4096;

    let mut data = Vec::new();
    loop {
        let filled = data.len();
        data.resize(filled + CHUNK, 0);
        match source.read_chunk(&mut data[filled..]) {
            Ok(0) => {
                data.truncate(filled);
                return Ok(data);
            }
            Ok(read) => data.truncate(filled + read),
            Err(err) => return Err(err),
        }
    }
}

/// Replays an in-memory payload in bounded reads.
///
/// Each read returns at most the next size from the chunk schedule, cycling
/// through the schedule until the payload is exhausted. This lets tests and
/// benchmarks split a payload at arbitrary points, including in the middle
/// of a token.
#[derive(Debug, Clone)]
pub struct ChunkedSource<'a> {
    payload: &'a [u8],
    sizes: Vec<usize>,
    next: usize,
}

impl<'a> ChunkedSource<'a> {
    /// Serve `payload` in reads of at most `chunk_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[must_use]
    pub fn new(payload: &'a [u8], chunk_size: usize) -> Self {
        assert!(chunk_size > 0);
        Self::with_sizes(payload, vec![chunk_size])
    }

    /// Serve `payload` following the chunk schedule `sizes`.
    ///
    /// Zero sizes are bumped to one byte so that a read only returns `0` at
    /// the end of the payload. An empty schedule serves everything in one
    /// read.
    #[must_use]
    pub fn with_sizes(payload: &'a [u8], sizes: Vec<usize>) -> Self {
        let sizes = if sizes.is_empty() {
            vec![payload.len().max(1)]
        } else {
            sizes.into_iter().map(|size| size.max(1)).collect()
        };
        Self {
            payload,
            sizes,
            next: 0,
        }
    }

    /// Split `payload` into `parts` chunks of roughly equal length.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    #[must_use]
    pub fn in_parts(payload: &'a [u8], parts: usize) -> Self {
        assert!(parts > 0);
        Self::new(payload, payload.len().div_ceil(parts).max(1))
    }

    /// Bytes not yet served.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.payload
    }
}

impl Read for ChunkedSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let limit = self.sizes[self.next % self.sizes.len()];
        let len = limit.min(buf.len()).min(self.payload.len());
        if len == 0 {
            return Ok(0);
        }
        self.next += 1;

        let (chunk, rest) = self.payload.split_at(len);
        buf[..len].copy_from_slice(chunk);
        self.payload = rest;
        Ok(len)
    }
}
