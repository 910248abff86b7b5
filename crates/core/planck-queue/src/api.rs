//! Status-returning entry points over [`RawQueue`].
//!
//! These free functions keep the classic five-call surface of a C queue
//! module: every call takes possibly-absent references and returns a
//! [`Status`] code instead of a `Result`. Absent references (`None`) are
//! rejected with [`Status::InvalidArgument`] before anything is touched.
//! The two predicates never fail: an absent queue reads as empty and not
//! full.
//!
//! # Examples
//!
//! ```
//! use planck_queue::{api, RawQueue, Status};
//!
//! let mut storage = [0u8; 12];
//! let mut q = RawQueue::unbound();
//!
//! assert_eq!(api::init(Some(&mut q), Some(&mut storage), 4, 3), Status::Ok);
//! assert_eq!(api::push(Some(&mut q), Some(&10u32.to_le_bytes())), Status::Ok);
//! assert_eq!(api::push(Some(&mut q), None), Status::InvalidArgument);
//!
//! let mut out = [0u8; 4];
//! assert_eq!(api::pop(Some(&mut q), Some(&mut out)), Status::Ok);
//! assert_eq!(u32::from_le_bytes(out), 10);
//! assert!(api::is_empty(Some(&q)));
//! assert!(!api::is_full(None));
//! ```

use crate::error::{QueueError, Status};
use crate::raw::RawQueue;

/// Binds `queue` to `buffer` and resets its indices.
///
/// Returns [`Status::InvalidArgument`] if `queue` or `buffer` is absent,
/// `element_size` or `capacity` is zero, or `buffer` is shorter than
/// `element_size * capacity` bytes. `queue` is untouched in that case.
pub fn init<'a>(
    queue: Option<&mut RawQueue<'a>>,
    buffer: Option<&'a mut [u8]>,
    element_size: u16,
    capacity: u16,
) -> Status {
    match (queue, buffer) {
        (Some(q), Some(buf)) => q.init(buf, element_size, capacity).into(),
        _ => QueueError::InvalidArgument.into(),
    }
}

/// Copies `element_size` bytes from `item` to the back of `queue`.
///
/// Returns [`Status::Full`] when the queue is full and
/// [`Status::InvalidArgument`] when a reference is absent or unusable.
pub fn push(queue: Option<&mut RawQueue<'_>>, item: Option<&[u8]>) -> Status {
    match (queue, item) {
        (Some(q), Some(item)) => q.push(item).into(),
        _ => QueueError::InvalidArgument.into(),
    }
}

/// Moves the oldest element of `queue` into `out`.
///
/// Returns [`Status::Empty`] when the queue is empty and
/// [`Status::InvalidArgument`] when a reference is absent or unusable.
/// `out` is untouched unless the result is [`Status::Ok`].
pub fn pop(queue: Option<&mut RawQueue<'_>>, out: Option<&mut [u8]>) -> Status {
    match (queue, out) {
        (Some(q), Some(out)) => q.pop(out).into(),
        _ => QueueError::InvalidArgument.into(),
    }
}

/// Returns true if `queue` holds no elements or is absent.
#[must_use]
pub fn is_empty(queue: Option<&RawQueue<'_>>) -> bool {
    queue.is_none_or(RawQueue::is_empty)
}

/// Returns true if `queue` is present and holds `capacity` elements.
#[must_use]
pub fn is_full(queue: Option<&RawQueue<'_>>) -> bool {
    queue.is_some_and(RawQueue::is_full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_absent_references() {
        let mut buf = [0u8; 16];
        let mut q = RawQueue::unbound();
        assert_eq!(init(None, Some(&mut buf), 4, 4), Status::InvalidArgument);
        assert_eq!(init(Some(&mut q), None, 4, 4), Status::InvalidArgument);
        assert!(!q.is_bound());
    }

    #[test]
    fn init_with_zero_sizes() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        let mut q = RawQueue::unbound();
        assert_eq!(init(Some(&mut q), Some(&mut a), 0, 4), Status::InvalidArgument);
        assert_eq!(init(Some(&mut q), Some(&mut b), 4, 0), Status::InvalidArgument);
        assert!(!q.is_bound());
    }

    #[test]
    fn init_binds_and_resets() {
        let mut buf = [0u8; 16];
        let mut q = RawQueue::unbound();
        assert_eq!(init(Some(&mut q), Some(&mut buf), 4, 4), Status::Ok);
        assert_eq!(q.element_size(), 4);
        assert_eq!(q.capacity(), 4);
        assert_eq!((q.head(), q.tail(), q.len()), (0, 0, 0));
    }

    #[test]
    fn push_and_pop_with_absent_references() {
        let mut buf = [0u8; 12];
        let mut q = RawQueue::new(&mut buf, 4, 3).unwrap();
        let item = 1i32.to_ne_bytes();
        let mut out = [0u8; 4];

        assert_eq!(push(None, Some(&item)), Status::InvalidArgument);
        assert_eq!(push(Some(&mut q), None), Status::InvalidArgument);
        assert_eq!(pop(None, Some(&mut out)), Status::InvalidArgument);
        assert_eq!(pop(Some(&mut q), None), Status::InvalidArgument);
        assert!(q.is_empty());
    }

    #[test]
    fn predicates_on_absent_queue() {
        assert!(is_empty(None));
        assert!(!is_full(None));
    }

    #[test]
    fn push_until_full() {
        let mut buf = [0u8; 12];
        let mut q = RawQueue::new(&mut buf, 4, 3).unwrap();
        let value = 1i32.to_ne_bytes();
        for _ in 0..3 {
            assert_eq!(push(Some(&mut q), Some(&value)), Status::Ok);
        }
        assert!(is_full(Some(&q)));
        assert!(!is_empty(Some(&q)));
        assert_eq!(push(Some(&mut q), Some(&value)), Status::Full);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn pop_empty_reports_status() {
        let mut buf = [0u8; 12];
        let mut q = RawQueue::new(&mut buf, 4, 3).unwrap();
        let mut out = [0u8; 4];
        assert_eq!(pop(Some(&mut q), Some(&mut out)), Status::Empty);
    }
}
