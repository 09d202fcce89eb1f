//! Buffer ownership.
//!
//! An [`Arena`] is an input buffer and an output buffer owned together. The
//! shared decoders all draw from one process-wide arena, created on first
//! use and kept until the process exits. It is handed out through
//! [`SharedArena`], which at most one owner holds at a time.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError, TryLockError};

use tracing::debug;

use crate::{
    buffer::{FixedBuffer, GrowableBuffer},
    error::AcquireError,
};

/// Capacity of the process-wide input buffer.
pub const SHARED_INPUT_CAPACITY: usize = 4096;

/// Capacity of the process-wide fixed output buffer.
pub const SHARED_OUTPUT_CAPACITY: usize = 4096;

#[derive(Debug)]
pub(crate) struct Arena {
    pub(crate) input: Box<[u8]>,
    pub(crate) output: FixedBuffer,
}

impl Arena {
    pub(crate) fn new(input_capacity: usize, output_capacity: usize) -> Self {
        Self {
            input: vec![0; input_capacity].into_boxed_slice(),
            output: FixedBuffer::new(output_capacity),
        }
    }
}

#[derive(Debug)]
pub(crate) struct SharedState {
    pub(crate) arena: Arena,
    pub(crate) dynamic: GrowableBuffer,
}

static SHARED: OnceLock<Mutex<SharedState>> = OnceLock::new();

fn shared() -> &'static Mutex<SharedState> {
    SHARED.get_or_init(|| {
        debug!(
            input_capacity = SHARED_INPUT_CAPACITY,
            output_capacity = SHARED_OUTPUT_CAPACITY,
            "allocating shared arena"
        );
        Mutex::new(SharedState {
            arena: Arena::new(SHARED_INPUT_CAPACITY, SHARED_OUTPUT_CAPACITY),
            dynamic: GrowableBuffer::new(),
        })
    })
}

/// Exclusive handle to the process-wide decode buffers.
///
/// The shared decoders ([`SharedBufferDecoder`], [`StreamingFixedDecoder`]
/// and [`StreamingDynamicDecoder`]) borrow this handle mutably, and the
/// output they return borrows the decoder. Together this means:
///
/// - only one owner uses the shared buffers at a time;
/// - a returned view is gone before the next decode on the arena starts.
///
/// The handle is not `Send`. Release it by dropping it; the buffers stay
/// allocated for the lifetime of the process, including the high-water
/// capacity of the growable buffer.
///
/// Acquiring the arena a second time on a thread that already holds it
/// never succeeds: [`try_acquire`](Self::try_acquire) reports
/// [`AcquireError::Busy`] and [`acquire`](Self::acquire) deadlocks or panics.
///
/// [`SharedBufferDecoder`]: crate::SharedBufferDecoder
/// [`StreamingFixedDecoder`]: crate::StreamingFixedDecoder
/// [`StreamingDynamicDecoder`]: crate::StreamingDynamicDecoder
pub struct SharedArena {
    guard: MutexGuard<'static, SharedState>,
}

impl SharedArena {
    /// Take the arena if nobody holds it. Never blocks.
    ///
    /// # Errors
    ///
    /// [`AcquireError::Busy`] if another owner holds the arena.
    pub fn try_acquire() -> Result<Self, AcquireError> {
        match shared().try_lock() {
            Ok(guard) => Ok(Self { guard }),
            // Every decode resets the buffers before use, so a panic while
            // they were held leaves nothing to recover.
            Err(TryLockError::Poisoned(poisoned)) => Ok(Self {
                guard: poisoned.into_inner(),
            }),
            Err(TryLockError::WouldBlock) => Err(AcquireError::Busy),
        }
    }

    /// Wait until the current owner releases the arena, then take it.
    ///
    /// The wait happens here, before any decoding; decoders built from the
    /// handle never block on anything but their source.
    #[must_use]
    pub fn acquire() -> Self {
        Self {
            guard: shared().lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Capacity of the shared input buffer.
    #[must_use]
    pub fn input_capacity(&self) -> usize {
        self.guard.arena.input.len()
    }

    /// Capacity of the shared fixed output buffer.
    #[must_use]
    pub fn output_capacity(&self) -> usize {
        self.guard.arena.output.capacity()
    }

    /// Current capacity of the shared growable output buffer.
    #[must_use]
    pub fn dynamic_capacity(&self) -> usize {
        self.guard.dynamic.capacity()
    }

    pub(crate) fn state(&mut self) -> &mut SharedState {
        &mut self.guard
    }
}

impl core::fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedArena")
            .field("input_capacity", &self.input_capacity())
            .field("output_capacity", &self.output_capacity())
            .field("dynamic_capacity", &self.dynamic_capacity())
            .finish_non_exhaustive()
    }
}
