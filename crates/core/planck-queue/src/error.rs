//! Queue error and status codes.
//!
//! Fallible engine methods return `Result<_, QueueError>`. The [`api`](crate::api)
//! facade flattens those results into a [`Status`] code, whose numeric values
//! are stable and suitable for crossing a C boundary or a log record.

use core::fmt;

/// Errors that can occur when operating on a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds `capacity` elements; nothing was written.
    Full,
    /// The queue holds no elements; nothing was read.
    Empty,
    /// A reference was absent or too short, a size was zero, or the queue
    /// is not bound to storage. Detected before any state is touched.
    InvalidArgument,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("queue is full"),
            Self::Empty => f.write_str("queue is empty"),
            Self::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

impl core::error::Error for QueueError {}

#[cfg(feature = "defmt")]
impl defmt::Format for QueueError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Full => defmt::write!(f, "Full"),
            Self::Empty => defmt::write!(f, "Empty"),
            Self::InvalidArgument => defmt::write!(f, "InvalidArgument"),
        }
    }
}

/// Outcome of a queue operation, as a plain status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[must_use]
pub enum Status {
    /// Operation completed successfully.
    Ok = 0,
    /// Queue is full; push failed.
    Full = 1,
    /// Queue is empty; pop failed.
    Empty = 2,
    /// Invalid parameters.
    InvalidArgument = 3,
}

impl Status {
    /// Returns `true` for [`Status::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Converts the status back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the matching [`QueueError`] for every status except
    /// [`Status::Ok`].
    pub const fn into_result(self) -> Result<(), QueueError> {
        match self {
            Self::Ok => Ok(()),
            Self::Full => Err(QueueError::Full),
            Self::Empty => Err(QueueError::Empty),
            Self::InvalidArgument => Err(QueueError::InvalidArgument),
        }
    }
}

impl From<QueueError> for Status {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::Full => Self::Full,
            QueueError::Empty => Self::Empty,
            QueueError::InvalidArgument => Self::InvalidArgument,
        }
    }
}

impl<T> From<Result<T, QueueError>> for Status {
    fn from(r: Result<T, QueueError>) -> Self {
        match r {
            Ok(_) => Self::Ok,
            Err(e) => e.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Full => f.write_str("full"),
            Self::Empty => f.write_str("empty"),
            Self::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Ok => defmt::write!(f, "Ok"),
            Self::Full => defmt::write!(f, "Full"),
            Self::Empty => defmt::write!(f, "Empty"),
            Self::InvalidArgument => defmt::write!(f, "InvalidArgument"),
        }
    }
}
