//! Grid extents, curvilinear axes, and node flattening.

use crate::error::GridError;
use std::fmt;

/// One of the three curvilinear grid axes.
///
/// Axes are named `p`, `q`, `r` to keep them visually distinct from the
/// Cartesian `x`, `y`, `z` that the orthonormalization stage produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First curvilinear axis.
    P,
    /// Second curvilinear axis.
    Q,
    /// Third curvilinear axis.
    R,
}

impl Axis {
    /// All three axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::P, Axis::Q, Axis::R];

    /// Index of this axis in canonical order (`P` = 0, `Q` = 1, `R` = 2).
    pub fn index(self) -> usize {
        match self {
            Axis::P => 0,
            Axis::Q => 1,
            Axis::R => 2,
        }
    }

    /// Cyclic successor: `P → Q → R → P`.
    ///
    /// The staggered-array layouts and the face reconstruction both walk
    /// the transverse axes in this cyclic order.
    pub fn next(self) -> Axis {
        match self {
            Axis::P => Axis::Q,
            Axis::Q => Axis::R,
            Axis::R => Axis::P,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::P => write!(f, "p"),
            Axis::Q => write!(f, "q"),
            Axis::R => write!(f, "r"),
        }
    }
}

/// Extents of the structured curvilinear grid.
///
/// Immutable for the lifetime of a run. Every buffer exchanged with the
/// reconstruction and snapshot stages is sized and flattened against these
/// extents: node `(i, j, k)` lives at flat index `i + np*(j + nq*k)`.
///
/// Each extent must be at least 2, so that every axis has at least one
/// staggered sample layer between its boundary nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    np: usize,
    nq: usize,
    nr: usize,
}

impl GridDims {
    /// Construct grid extents, validating that each axis has at least
    /// two nodes.
    pub fn new(np: usize, nq: usize, nr: usize) -> Result<Self, GridError> {
        for (axis, extent) in [(Axis::P, np), (Axis::Q, nq), (Axis::R, nr)] {
            if extent < 2 {
                return Err(GridError::ExtentTooSmall { axis, extent });
            }
        }
        Ok(Self { np, nq, nr })
    }

    /// Number of nodes along `p`.
    pub fn np(&self) -> usize {
        self.np
    }

    /// Number of nodes along `q`.
    pub fn nq(&self) -> usize {
        self.nq
    }

    /// Number of nodes along `r`.
    pub fn nr(&self) -> usize {
        self.nr
    }

    /// Number of nodes along the given axis.
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::P => self.np,
            Axis::Q => self.nq,
            Axis::R => self.nr,
        }
    }

    /// Total node count `np * nq * nr`, or `None` if it overflows `usize`.
    ///
    /// Extents are not bounded at construction; oversized grids surface
    /// as an allocation failure when the first output buffer is requested.
    pub fn checked_node_count(&self) -> Option<usize> {
        self.np.checked_mul(self.nq)?.checked_mul(self.nr)
    }

    /// Flat index of node `(i, j, k)` in a node-centered buffer.
    ///
    /// The flattening order is `i + np*(j + nq*k)`: `p` varies fastest,
    /// then `q`, then `r`. This order is shared with the on-disk snapshot
    /// format and must not change independently of it.
    pub fn node_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.np && j < self.nq && k < self.nr);
        i + self.np * (j + self.nq * k)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.np, self.nq, self.nr)
    }
}
