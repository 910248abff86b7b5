//! Byte-oriented, type-agnostic FIFO queue over borrowed storage.
//!
//! [`RawQueue`] treats every element as an opaque span of `element_size`
//! bytes and never interprets its contents. One engine can therefore hold
//! integers, packed structures or fixed-width records, all with the same
//! code. The backing buffer is borrowed from the caller for `'a` and is
//! never resized, reallocated or freed by the queue.
//!
//! Prefer [`Queue`](crate::queue::Queue) when the element type is known at
//! compile time; use `RawQueue` when untyped reuse matters more than type
//! safety.
//!
//! # Examples
//!
//! ```
//! use planck_queue::raw::RawQueue;
//! use planck_queue::QueueError;
//!
//! // 32-byte log records, two of them.
//! let mut storage = [0u8; 64];
//! let mut q = RawQueue::new(&mut storage, 32, 2).unwrap();
//!
//! let mut record = [0u8; 32];
//! record[..5].copy_from_slice(b"hello");
//! q.push(&record).unwrap();
//! q.push(&record).unwrap();
//! assert_eq!(q.push(&record), Err(QueueError::Full));
//!
//! let mut out = [0u8; 32];
//! q.pop(&mut out).unwrap();
//! assert_eq!(&out[..5], b"hello");
//! ```

use core::fmt;
use core::ops::Range;

use crate::bytes::copy_bytes;
use crate::error::QueueError;
use crate::index::RingIndex;

/// A FIFO queue of fixed-size byte elements stored in a borrowed buffer.
///
/// A `RawQueue` starts either bound (via [`RawQueue::new`]) or unbound (via
/// [`RawQueue::unbound`], usable in `static` items) and can be re-bound at
/// any time with [`RawQueue::init`]. [`RawQueue::clear`] and
/// [`RawQueue::reinit`] reset a bound queue in place. An unbound queue rejects push and pop
/// with [`QueueError::InvalidArgument`], reads as empty and never as full.
pub struct RawQueue<'a> {
    storage: Option<&'a mut [u8]>,
    element_size: u16,
    ring: RingIndex,
}

impl<'a> RawQueue<'a> {
    /// Creates a queue that is not bound to any storage.
    #[must_use]
    pub const fn unbound() -> Self {
        Self {
            storage: None,
            element_size: 0,
            ring: RingIndex::UNBOUND,
        }
    }

    /// Creates a queue bound to `buffer`.
    ///
    /// # Errors
    ///
    /// See [`RawQueue::init`].
    pub fn new(
        buffer: &'a mut [u8],
        element_size: u16,
        capacity: u16,
    ) -> Result<Self, QueueError> {
        let mut q = Self::unbound();
        q.init(buffer, element_size, capacity)?;
        Ok(q)
    }

    /// Binds the queue to `buffer`, discarding any previous binding and
    /// contents. Head, tail and count are reset to zero.
    ///
    /// Only the first `element_size * capacity` bytes of `buffer` are used.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `element_size` or
    /// `capacity` is zero, or if `buffer` is shorter than
    /// `element_size * capacity` bytes. The queue is untouched on error.
    pub fn init(
        &mut self,
        buffer: &'a mut [u8],
        element_size: u16,
        capacity: u16,
    ) -> Result<(), QueueError> {
        self.ring = check_layout(buffer.len(), element_size, capacity)?;
        self.storage = Some(buffer);
        self.element_size = element_size;
        Ok(())
    }

    /// Re-lays out the storage the queue is already bound to, discarding
    /// its contents. Head, tail and count are reset to zero.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if the queue is unbound, if
    /// `element_size` or `capacity` is zero, or if the bound buffer is
    /// shorter than `element_size * capacity` bytes. The queue is untouched
    /// on error.
    pub fn reinit(&mut self, element_size: u16, capacity: u16) -> Result<(), QueueError> {
        let Some(storage) = self.storage.as_deref() else {
            return Err(QueueError::InvalidArgument);
        };
        self.ring = check_layout(storage.len(), element_size, capacity)?;
        self.element_size = element_size;
        Ok(())
    }

    /// Drops every element, keeping the binding and layout.
    pub fn clear(&mut self) {
        self.ring.reset();
    }

    /// Copies the first `element_size` bytes of `item` to the back of the
    /// queue.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidArgument`] if the queue is unbound or `item`
    ///   is shorter than `element_size`.
    /// - [`QueueError::Full`] if the queue holds `capacity` elements.
    ///
    /// Nothing is modified on error.
    pub fn push(&mut self, item: &[u8]) -> Result<(), QueueError> {
        let Some(storage) = self.storage.as_deref_mut() else {
            return Err(QueueError::InvalidArgument);
        };
        let size = usize::from(self.element_size);
        if item.len() < size {
            return Err(QueueError::InvalidArgument);
        }

        let dst = slot_range(self.ring.tail(), self.element_size)
            .and_then(|range| storage.get_mut(range))
            .ok_or(QueueError::InvalidArgument)?;
        self.ring.claim_tail()?;
        copy_bytes(Some(dst), Some(item), self.element_size);
        Ok(())
    }

    /// Copies the oldest element into the first `element_size` bytes of
    /// `out` and removes it from the queue.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidArgument`] if the queue is unbound or `out`
    ///   is shorter than `element_size`.
    /// - [`QueueError::Empty`] if the queue holds no elements.
    ///
    /// Neither the queue nor `out` is modified on error.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<(), QueueError> {
        let Some(storage) = self.storage.as_deref() else {
            return Err(QueueError::InvalidArgument);
        };
        let size = usize::from(self.element_size);
        if out.len() < size {
            return Err(QueueError::InvalidArgument);
        }

        let src = slot_range(self.ring.head(), self.element_size)
            .and_then(|range| storage.get(range))
            .ok_or(QueueError::InvalidArgument)?;
        self.ring.release_head()?;
        copy_bytes(Some(out), Some(src), self.element_size);
        Ok(())
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns true if the queue holds `capacity` elements. An unbound
    /// queue is never full.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Returns true if the queue is bound to storage.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.storage.is_some()
    }

    /// Number of elements currently stored.
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.ring.len()
    }

    /// Maximum number of elements, or zero when unbound.
    #[must_use]
    pub const fn capacity(&self) -> u16 {
        self.ring.capacity()
    }

    /// Size of one element in bytes, or zero when unbound.
    #[must_use]
    pub const fn element_size(&self) -> u16 {
        self.element_size
    }

    /// Slot index of the oldest element.
    #[must_use]
    pub const fn head(&self) -> u16 {
        self.ring.head()
    }

    /// Slot index the next element will be written to.
    #[must_use]
    pub const fn tail(&self) -> u16 {
        self.ring.tail()
    }
}

/// Builds the ring for `capacity` elements of `element_size` bytes, checking
/// that they fit in `buffer_len` bytes.
fn check_layout(
    buffer_len: usize,
    element_size: u16,
    capacity: u16,
) -> Result<RingIndex, QueueError> {
    if element_size == 0 {
        return Err(QueueError::InvalidArgument);
    }
    let ring = RingIndex::new(capacity)?;
    match RingIndex::byte_offset(capacity, element_size) {
        Some(needed) if needed <= buffer_len => Ok(ring),
        _ => Err(QueueError::InvalidArgument),
    }
}

/// Byte range of `slot`. The storage is resolved before the ring moves, so a
/// slot that does not fit leaves the bookkeeping alone.
fn slot_range(slot: u16, element_size: u16) -> Option<Range<usize>> {
    let start = RingIndex::byte_offset(slot, element_size)?;
    let end = start.checked_add(usize::from(element_size))?;
    Some(start..end)
}

impl Default for RawQueue<'_> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl fmt::Debug for RawQueue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawQueue")
            .field("storage_len", &self.storage.as_deref().map(<[u8]>::len))
            .field("element_size", &self.element_size)
            .field("ring", &self.ring)
            .finish()
    }
}
