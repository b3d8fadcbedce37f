use alloc::vec::Vec;

use bstr::{BStr, ByteSlice};

use crate::error::{Field, Truncation};

/// Upper bound on the up-front allocation; larger capacities grow on demand.
const INITIAL_ALLOCATION: usize = 128;

/// Growable byte buffer with a hard length limit.
///
/// Pushes past the limit are counted and dropped, never an error. The drop
/// count resets together with the contents.
#[derive(Debug, Clone)]
pub(crate) struct BoundedBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    dropped: usize,
}

impl BoundedBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity.min(INITIAL_ALLOCATION)),
            capacity,
            dropped: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        if self.bytes.len() < self.capacity {
            self.bytes.push(byte);
        } else {
            self.dropped += 1;
        }
    }

    /// Clears the buffer and makes `byte` its first element.
    #[inline]
    pub(crate) fn start(&mut self, byte: u8) {
        self.clear();
        self.push(byte);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
        self.dropped = 0;
    }

    pub(crate) fn as_bstr(&self) -> &BStr {
        self.bytes.as_bstr()
    }

    /// Describes the loss, if any bytes were dropped since the last clear.
    pub(crate) fn truncation(&self, field: Field) -> Option<Truncation> {
        (self.dropped > 0).then_some(Truncation {
            field,
            capacity: self.capacity,
            dropped: self.dropped,
        })
    }
}
