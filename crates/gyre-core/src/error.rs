//! Error types for grid and staggered-array construction.

use crate::grid::Axis;
use std::fmt;

/// Errors arising from grid or staggered-field-view construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid extent is below the minimum of two nodes per axis.
    ExtentTooSmall {
        /// The offending axis.
        axis: Axis,
        /// The extent that was supplied.
        extent: usize,
    },
    /// A staggered sample array does not match the element count implied
    /// by the grid extents and its staggering.
    SampleCountMismatch {
        /// Name of the component array (`"Ep"`, `"Bq"`, ...).
        component: &'static str,
        /// Element count implied by the grid extents.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },
    /// The staggered element count implied by the grid extents overflows
    /// `usize`, so no conforming array can exist.
    SampleCountOverflow {
        /// Name of the component array.
        component: &'static str,
    },
    /// Staggered samples were validated against different extents than the
    /// ones an export call was configured with.
    DimsMismatch {
        /// Extents the export was configured with.
        expected: crate::grid::GridDims,
        /// Extents the samples were validated against.
        actual: crate::grid::GridDims,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentTooSmall { axis, extent } => {
                write!(f, "extent {extent} along {axis} is below the minimum of 2")
            }
            Self::SampleCountMismatch {
                component,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{component} has {actual} samples, extents imply {expected}"
                )
            }
            Self::SampleCountOverflow { component } => {
                write!(f, "{component} sample count overflows usize")
            }
            Self::DimsMismatch { expected, actual } => {
                write!(f, "samples built for a {actual} grid, export configured for {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}
