//! Strongly-typed FIFO queue over borrowed storage.
//!
//! [`Queue`] is the typed counterpart of [`RawQueue`](crate::raw::RawQueue):
//! the caller still owns the backing slots, but elements go in and out as
//! `T` instead of byte spans, so no copy loop or layout reasoning is needed.

use crate::error::QueueError;
use crate::index::RingIndex;

/// A FIFO queue of `T` stored in a caller-owned slice.
///
/// # Examples
///
/// ```
/// use planck_queue::queue::Queue;
/// use planck_queue::QueueError;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Default)]
/// struct Sample {
///     channel: u8,
///     value: i16,
/// }
///
/// let mut slots = [Sample::default(); 4];
/// let mut q = Queue::new(&mut slots).unwrap();
///
/// q.push(Sample { channel: 1, value: -3 }).unwrap();
/// assert_eq!(q.peek(), Some(&Sample { channel: 1, value: -3 }));
/// assert_eq!(q.pop().unwrap().value, -3);
/// assert_eq!(q.pop(), Err(QueueError::Empty));
/// ```
#[derive(Debug)]
pub struct Queue<'a, T: Copy> {
    slots: &'a mut [T],
    ring: RingIndex,
}

impl<'a, T: Copy> Queue<'a, T> {
    /// Creates a queue using every slot of `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `storage` is empty or
    /// longer than `u16::MAX` slots.
    pub fn new(storage: &'a mut [T]) -> Result<Self, QueueError> {
        let capacity = u16::try_from(storage.len()).map_err(|_| QueueError::InvalidArgument)?;
        Self::with_capacity(storage, capacity)
    }

    /// Creates a queue using the first `capacity` slots of `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] if `capacity` is zero or
    /// larger than `storage.len()`.
    pub fn with_capacity(storage: &'a mut [T], capacity: u16) -> Result<Self, QueueError> {
        let ring = RingIndex::new(capacity)?;
        let slots = storage
            .get_mut(..usize::from(capacity))
            .ok_or(QueueError::InvalidArgument)?;
        Ok(Self { slots, ring })
    }

    /// Re-binds the queue to `storage`, discarding all elements.
    ///
    /// # Errors
    ///
    /// Same as [`Queue::new`]. The queue is untouched on error.
    pub fn init(&mut self, storage: &'a mut [T]) -> Result<(), QueueError> {
        *self = Self::new(storage)?;
        Ok(())
    }

    /// Appends `item` to the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`] if the queue holds `capacity` elements.
    pub fn push(&mut self, item: T) -> Result<(), QueueError> {
        let slot = self.ring.claim_tail()?;
        self.slots[usize::from(slot)] = item;
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let slot = self.ring.release_head()?;
        Ok(self.slots[usize::from(slot)])
    }

    /// Returns the oldest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.ring.is_empty() {
            return None;
        }
        self.slots.get(usize::from(self.ring.head()))
    }

    /// Drops every element. Slot contents are left as they are.
    pub fn clear(&mut self) {
        self.ring.reset();
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns true if the queue holds `capacity` elements.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Number of elements currently stored.
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.ring.len()
    }

    /// Maximum number of elements.
    #[must_use]
    pub const fn capacity(&self) -> u16 {
        self.ring.capacity()
    }
}
