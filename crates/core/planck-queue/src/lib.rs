//! Deterministic, fixed-capacity FIFO queues over caller-owned memory.
//!
//! This crate provides a ring buffer engine for environments where heap
//! allocation, recursion, and non-deterministic library calls are off the
//! table: kernels, interrupt handlers, firmware, and safety-critical code.
//! The engine never allocates and never frees. It only keeps indices into
//! memory that the caller lends it for the lifetime of the binding.
//!
//! # Overview
//!
//! Three front-ends share one index state machine ([`index::RingIndex`]):
//!
//! - [`raw::RawQueue`] - a byte-oriented, type-agnostic queue bound to a
//!   borrowed `&mut [u8]`. Every element is an opaque span of
//!   `element_size` bytes, so one engine serves any fixed-size element type.
//! - [`queue::Queue`] - a strongly-typed queue bound to a borrowed `&mut [T]`.
//! - [`array::ArrayQueue`] - a strongly-typed queue with inline storage of
//!   compile-time capacity, suitable for `static` placement.
//!
//! The [`api`] module exposes the classic status-returning entry points
//! (`init`, `push`, `pop`, `is_empty`, `is_full`) on top of [`raw::RawQueue`],
//! with absent references expressed as `None`.
//!
//! # Capacity
//!
//! Unlike a two-index ring buffer, the element count is tracked separately
//! from the head and tail indices, so every slot is usable: a queue with
//! capacity `N` holds exactly `N` elements.
//!
//! # Concurrency
//!
//! There is no internal synchronization. Every operation completes in time
//! bounded by the element size and either mutates the queue or fails without
//! touching it. Callers that share a queue between contexts must serialize
//! access themselves.
//!
//! # Examples
//!
//! ## Byte-oriented queue
//!
//! ```
//! use planck_queue::raw::RawQueue;
//!
//! let mut storage = [0u8; 3 * 4];
//! let mut q = RawQueue::new(&mut storage, 4, 3).unwrap();
//!
//! q.push(&10i32.to_ne_bytes()).unwrap();
//! q.push(&20i32.to_ne_bytes()).unwrap();
//!
//! let mut out = [0u8; 4];
//! q.pop(&mut out).unwrap();
//! assert_eq!(i32::from_ne_bytes(out), 10);
//! assert_eq!(q.len(), 1);
//! ```
//!
//! ## Typed queue
//!
//! ```
//! use planck_queue::queue::Queue;
//! use planck_queue::QueueError;
//!
//! let mut storage = [0u32; 2];
//! let mut q = Queue::new(&mut storage).unwrap();
//!
//! q.push(1).unwrap();
//! q.push(2).unwrap();
//! assert_eq!(q.push(3), Err(QueueError::Full));
//! assert_eq!(q.pop(), Ok(1));
//! ```
//!
//! # Features
//!
//! - `defmt`: implements `defmt::Format` for [`QueueError`] and [`Status`].

#![cfg_attr(not(test), no_std)]

pub mod api;
pub mod array;
pub mod bytes;
pub mod error;
pub mod index;
pub mod queue;
pub mod raw;

pub use array::ArrayQueue;
pub use error::{QueueError, Status};
pub use queue::Queue;
pub use raw::RawQueue;
