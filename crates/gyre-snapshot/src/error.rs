//! Error types for snapshot export and playback.

use gyre_core::{AllocError, GridError};
use std::fmt;
use std::io;

/// Errors that can occur while exporting or reading a snapshot.
///
/// Every export call either completes a full record or fails with one of
/// these; there is no partial-success signal. Scratch buffers and file
/// descriptors are released on every exit path.
#[derive(Debug)]
pub enum SnapshotError {
    /// A scratch buffer could not be allocated. Detected before any file
    /// I/O for the affected record.
    AllocationFailed,
    /// The formatted output path exceeds the fixed capacity. Detected
    /// before attempting to open the file.
    PathTooLong {
        /// Length of the formatted path in bytes.
        len: usize,
        /// Maximum supported length.
        max: usize,
    },
    /// The staggered inputs do not fit the configured grid.
    Grid(GridError),
    /// An I/O error from open, write, or read.
    Io(io::Error),
    /// The file does not start with the expected snapshot header.
    InvalidHeader,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed => write!(f, "scratch buffer allocation failed"),
            Self::PathTooLong { len, max } => {
                write!(f, "output path is {len} bytes, maximum is {max}")
            }
            Self::Grid(e) => write!(f, "invalid field input: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidHeader => write!(f, "not a snapshot file (bad header)"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<AllocError> for SnapshotError {
    fn from(_: AllocError) -> Self {
        Self::AllocationFailed
    }
}

impl From<GridError> for SnapshotError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
