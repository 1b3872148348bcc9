use std::collections::TryReserveError;

use thiserror::Error;

/// The error type shared by the tessella crates.
///
/// The actual failure is described by [`ErrorKind`]; `Error` boxes it to keep
/// the `Result` payload a single pointer wide.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }

    pub fn allocation_failed(slot_count: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::AllocationFailed { slot_count, source }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Checked indexed access with an index at or beyond the logical length.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Storage for a new buffer could not be acquired from the allocator.
    #[error("failed to allocate storage for {slot_count} slots")]
    AllocationFailed {
        slot_count: usize,
        source: TryReserveError,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
