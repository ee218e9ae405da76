//! Dense node-centered output buffers.

use crate::error::GridError;
use crate::grid::GridDims;
use std::collections::TryReserveError;
use std::fmt;

/// Scratch-buffer allocation failure.
///
/// Raised when the node count overflows `usize` or the allocator refuses
/// the request. Detected before any file I/O begins; the snapshot layer
/// maps this to its out-of-memory error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node buffer allocation failed")
    }
}

impl std::error::Error for AllocError {}

impl From<TryReserveError> for AllocError {
    fn from(_: TryReserveError) -> Self {
        AllocError
    }
}

/// Three dense single-precision component buffers over the grid nodes.
///
/// Holds either a physical field (X, Y, Z components) or node positions,
/// one `f32` per node per component, flattened as
/// [`GridDims::node_index`]. Allocated fresh per export call and dropped
/// before the call returns; nothing is cached across calls.
#[derive(Debug, Clone)]
pub struct VectorField {
    dims: GridDims,
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
}

impl VectorField {
    /// Allocate zeroed component buffers, failing softly on overflow or
    /// allocator refusal instead of aborting the process.
    pub fn try_new(dims: GridDims) -> Result<Self, AllocError> {
        let n = dims.checked_node_count().ok_or(AllocError)?;
        let mut bufs = [Vec::new(), Vec::new(), Vec::new()];
        for buf in &mut bufs {
            buf.try_reserve_exact(n)?;
            buf.resize(n, 0.0);
        }
        let [x, y, z] = bufs;
        Ok(Self { dims, x, y, z })
    }

    /// Grid extents the buffers are sized against.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Elements per component buffer.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True only for a degenerate zero-node grid, which construction
    /// rules out; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Store a vector at flat node index `l`, narrowing to `f32`.
    pub fn set(&mut self, l: usize, v: [f64; 3]) {
        self.x[l] = v[0] as f32;
        self.y[l] = v[1] as f32;
        self.z[l] = v[2] as f32;
    }

    /// X (first) component buffer.
    pub fn x(&self) -> &[f32] {
        &self.x
    }

    /// Y (second) component buffer.
    pub fn y(&self) -> &[f32] {
        &self.y
    }

    /// Z (third) component buffer.
    pub fn z(&self) -> &[f32] {
        &self.z
    }
}

/// Validate that a set of staggered samples matches the extents an export
/// was configured with.
///
/// The reconstruction loops index sample arrays with arithmetic derived
/// from the configured extents, so a mismatch here would read the wrong
/// slots even when every access stays in bounds.
pub fn check_dims(expected: GridDims, actual: GridDims) -> Result<(), GridError> {
    if expected != actual {
        return Err(GridError::DimsMismatch { expected, actual });
    }
    Ok(())
}
