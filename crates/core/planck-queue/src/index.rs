//! Ring index bookkeeping shared by every queue front-end.
//!
//! [`RingIndex`] is the whole state machine: a capacity, a head, a tail and
//! an element count. It knows nothing about storage. Front-ends ask it for a
//! slot with [`RingIndex::claim_tail`] before writing and
//! [`RingIndex::release_head`] before reading, and only touch storage when
//! the call succeeded.
//!
//! Tracking `count` separately from `head` and `tail` removes the usual
//! `head == tail` ambiguity, so all `capacity` slots are usable.

use crate::error::QueueError;

/// Head/tail/count bookkeeping for a ring of `capacity` slots.
///
/// # Invariants
///
/// - `count <= capacity`
/// - `head < capacity` and `tail < capacity` whenever `capacity > 0`
/// - `(head + count) % capacity == tail` whenever `capacity > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingIndex {
    capacity: u16,
    head: u16,
    tail: u16,
    count: u16,
}

impl RingIndex {
    /// A ring with no slots. Every claim fails and it reports empty and not
    /// full.
    pub const UNBOUND: Self = Self {
        capacity: 0,
        head: 0,
        tail: 0,
        count: 0,
    };

    /// Creates an empty ring of `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `capacity` is zero.
    pub const fn new(capacity: u16) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidArgument);
        }
        Ok(Self {
            capacity,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Maximum number of elements.
    #[must_use]
    pub const fn capacity(&self) -> u16 {
        self.capacity
    }

    /// Slot of the oldest element (next to be popped).
    #[must_use]
    pub const fn head(&self) -> u16 {
        self.head
    }

    /// Slot the next pushed element will be written to.
    #[must_use]
    pub const fn tail(&self) -> u16 {
        self.tail
    }

    /// Number of elements currently stored.
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.count
    }

    /// Returns true if no elements are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if `capacity` elements are stored.
    ///
    /// A ring with no slots is never full.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.capacity != 0 && self.count == self.capacity
    }

    /// Forgets every stored element without changing the capacity.
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Reserves the tail slot for a push and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] for a ring with no slots and
    /// [`QueueError::Full`] when `count == capacity`. The ring is unchanged
    /// on error.
    pub fn claim_tail(&mut self) -> Result<u16, QueueError> {
        if self.capacity == 0 {
            return Err(QueueError::InvalidArgument);
        }
        if self.count >= self.capacity {
            return Err(QueueError::Full);
        }
        let slot = self.tail;
        self.tail = self.advance(slot);
        self.count += 1;
        Ok(slot)
    }

    /// Releases the head slot for a pop and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] for a ring with no slots and
    /// [`QueueError::Empty`] when `count == 0`. The ring is unchanged on
    /// error.
    pub fn release_head(&mut self) -> Result<u16, QueueError> {
        if self.capacity == 0 {
            return Err(QueueError::InvalidArgument);
        }
        if self.count == 0 {
            return Err(QueueError::Empty);
        }
        let slot = self.head;
        self.head = self.advance(slot);
        self.count -= 1;
        Ok(slot)
    }

    /// Byte offset of `slot` in a buffer of `element_size`-byte elements.
    ///
    /// The product is formed in `u32`, where `u16::MAX * u16::MAX` fits.
    /// Returns `None` if it does not fit in `usize`, which can only happen
    /// on 16-bit targets.
    #[must_use]
    pub fn byte_offset(slot: u16, element_size: u16) -> Option<usize> {
        usize::try_from(u32::from(slot) * u32::from(element_size)).ok()
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn advance(&self, slot: u16) -> u16 {
        // Result is < capacity, which fits in u16.
        ((slot as u32 + 1) % self.capacity as u32) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(RingIndex::new(0), Err(QueueError::InvalidArgument));
    }

    #[test]
    fn new_ring_is_empty() {
        let ring = RingIndex::new(3).unwrap();
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!((ring.head(), ring.tail(), ring.len()), (0, 0, 0));
    }

    #[test]
    fn claim_until_full() {
        let mut ring = RingIndex::new(3).unwrap();
        assert_eq!(ring.claim_tail(), Ok(0));
        assert_eq!(ring.claim_tail(), Ok(1));
        assert_eq!(ring.claim_tail(), Ok(2));
        assert!(ring.is_full());
        assert_eq!(ring.tail(), 0);

        let before = ring;
        assert_eq!(ring.claim_tail(), Err(QueueError::Full));
        assert_eq!(ring, before);
    }

    #[test]
    fn release_on_empty_leaves_ring_unchanged() {
        let mut ring = RingIndex::new(2).unwrap();
        let before = ring;
        assert_eq!(ring.release_head(), Err(QueueError::Empty));
        assert_eq!(ring, before);
    }

    #[test]
    fn unbound_ring_rejects_everything() {
        let mut ring = RingIndex::UNBOUND;
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.claim_tail(), Err(QueueError::InvalidArgument));
        assert_eq!(ring.release_head(), Err(QueueError::InvalidArgument));
    }

    #[test]
    fn indices_wrap_at_capacity() {
        let mut ring = RingIndex::new(3).unwrap();
        for round in 0..10u16 {
            let slot = ring.claim_tail().unwrap();
            assert_eq!(slot, round % 3);
            assert_eq!(ring.release_head(), Ok(slot));
            assert!(ring.head() < 3 && ring.tail() < 3);
        }
    }

    #[test]
    fn max_capacity_wraps_without_overflow() {
        let mut ring = RingIndex::new(u16::MAX).unwrap();
        for _ in 0..u16::MAX {
            ring.claim_tail().unwrap();
        }
        assert!(ring.is_full());
        assert_eq!(ring.tail(), 0);
        assert_eq!(ring.len(), u16::MAX);
    }

    #[test]
    fn head_plus_count_tracks_tail() {
        let mut ring = RingIndex::new(5).unwrap();
        for step in 0..40u16 {
            if step % 3 == 2 {
                let _ = ring.release_head();
            } else {
                let _ = ring.claim_tail();
            }
            let cap = u32::from(ring.capacity());
            let expected = (u32::from(ring.head()) + u32::from(ring.len())) % cap;
            assert_eq!(u32::from(ring.tail()), expected);
            assert!(ring.len() <= ring.capacity());
        }
    }

    #[test]
    fn byte_offset_uses_wide_arithmetic() {
        assert_eq!(
            RingIndex::byte_offset(u16::MAX, u16::MAX),
            usize::try_from(4_294_836_225u32).ok()
        );
        assert_eq!(RingIndex::byte_offset(3, 4), Some(12));
        assert_eq!(RingIndex::byte_offset(0, u16::MAX), Some(0));
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut ring = RingIndex::new(4).unwrap();
        ring.claim_tail().unwrap();
        ring.claim_tail().unwrap();
        ring.release_head().unwrap();
        ring.reset();
        assert_eq!(ring, RingIndex::new(4).unwrap());
    }
}
