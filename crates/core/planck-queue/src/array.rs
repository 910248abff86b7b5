//! Fixed-capacity FIFO queue with inline storage.
//!
//! This module provides [`ArrayQueue`], a FIFO queue whose slots live inside
//! the value itself. The capacity is a const generic, checked at compile
//! time, so an `ArrayQueue` can be placed in a `static` and shared by an
//! interrupt handler and a task behind the caller's own lock.
//!
//! # Capacity
//!
//! The element count is tracked next to the head and tail indices, so the
//! usable capacity is exactly `N`. `N` must be between 1 and `u16::MAX`.
//!
//! # Performance
//!
//! - Push: O(1)
//! - Pop: O(1)
//! - Space: `N * size_of::<T>()` bytes plus four `u16` counters
//!
//! # Examples
//!
//! ```
//! use planck_queue::array::ArrayQueue;
//! use planck_queue::QueueError;
//!
//! let mut q = ArrayQueue::<u8, 3>::new();
//!
//! q.push(1).unwrap();
//! q.push(2).unwrap();
//! q.push(3).unwrap();
//! assert_eq!(q.push(4), Err(QueueError::Full));
//!
//! assert_eq!(q.pop(), Ok(1));
//! q.push(4).unwrap();
//! assert_eq!(q.len(), 3);
//! ```

use core::fmt;
use core::mem::MaybeUninit;

use crate::error::QueueError;
use crate::index::RingIndex;

/// A FIFO queue with `N` inline slots.
///
/// # Type Parameters
///
/// - `T`: The type of elements stored (must be `Copy`)
/// - `N`: The capacity, `1..=u16::MAX`
#[derive(Clone, Copy)]
pub struct ArrayQueue<T: Copy, const N: usize> {
    buf: [MaybeUninit<T>; N],
    ring: RingIndex,
}

impl<T: Copy, const N: usize> Default for ArrayQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> ArrayQueue<T, N> {
    /// The capacity.
    ///
    /// Evaluating it for `N == 0` or `N > u16::MAX` is a compile error:
    ///
    /// ```compile_fail
    /// use planck_queue::array::ArrayQueue;
    ///
    /// static NONE: ArrayQueue<u8, 0> = ArrayQueue::new();
    /// ```
    ///
    /// ```compile_fail
    /// use planck_queue::array::ArrayQueue;
    ///
    /// static TOO_MANY: ArrayQueue<u8, 65_536> = ArrayQueue::new();
    /// ```
    pub const CAPACITY: u16 = {
        assert!(N > 0, "ArrayQueue capacity must be non-zero");
        assert!(N <= u16::MAX as usize, "ArrayQueue capacity must fit in u16");
        #[allow(clippy::cast_possible_truncation)]
        let capacity = N as u16;
        capacity
    };

    /// Creates an empty queue. Does not allocate.
    ///
    /// # Example
    /// ```
    /// use planck_queue::array::ArrayQueue;
    ///
    /// static EVENTS: ArrayQueue<u32, 16> = ArrayQueue::new();
    /// assert_eq!(EVENTS.capacity(), 16);
    ///
    /// let q = ArrayQueue::<u8, 8>::new();
    /// assert!(q.is_empty());
    /// assert_eq!(q.capacity(), 8);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        let ring = match RingIndex::new(Self::CAPACITY) {
            Ok(ring) => ring,
            Err(_) => RingIndex::UNBOUND,
        };
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            ring,
        }
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns true if the queue holds `N` elements.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Number of elements currently stored.
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.ring.len()
    }

    /// Maximum number of elements, equal to `N`.
    #[must_use]
    pub const fn capacity(&self) -> u16 {
        Self::CAPACITY
    }

    /// Appends `x` to the back of the queue.
    ///
    /// # Errors
    /// Returns [`QueueError::Full`] if the queue holds `N` elements.
    pub fn push(&mut self, x: T) -> Result<(), QueueError> {
        let slot = self.ring.claim_tail()?;
        self.buf[usize::from(slot)].write(x);
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let slot = self.ring.release_head()?;
        // SAFETY: `slot` was the head of a non-empty ring, so it was written
        // by the push that claimed it and has not been popped since.
        Ok(unsafe { self.buf[usize::from(slot)].assume_init_read() })
    }

    /// Returns the oldest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.ring.is_empty() {
            return None;
        }
        // SAFETY: the ring is non-empty, so the head slot holds a value
        // written by a push.
        Some(unsafe { self.buf[usize::from(self.ring.head())].assume_init_ref() })
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.ring.reset();
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for ArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("capacity", &N)
            .field("ring", &self.ring)
            .field("front", &self.peek())
            .finish()
    }
}
