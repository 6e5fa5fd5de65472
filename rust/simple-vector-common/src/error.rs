use std::alloc::Layout;

use thiserror::Error;

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

    pub fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    pub fn allocation(count: usize, layout: Layout) -> Error {
        Error(ErrorKind::Allocation { count, layout }.into())
    }

    pub fn capacity_overflow(count: usize) -> Error {
        Error(ErrorKind::CapacityOverflow { count }.into())
    }

    /// Returns `true` if this error was raised by a checked element access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` if the allocator could not provide the requested memory,
    /// either because it refused the request or because the request could not
    /// be expressed as a valid layout.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Allocation { .. } | ErrorKind::CapacityOverflow { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error(
        "failed to allocate {count} slots ({} bytes, align {})",
        layout.size(),
        layout.align()
    )]
    Allocation { count: usize, layout: Layout },

    #[error("capacity overflow: {count} slots exceed the maximum allocation size")]
    CapacityOverflow { count: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
