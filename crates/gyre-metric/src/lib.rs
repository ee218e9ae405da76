//! Coordinate metrics for the Gyre field exporter.
//!
//! This crate defines the [`Metric`] trait — the pure-function interface
//! through which the reconstruction stage queries basis vectors, basis
//! lengths, and physical node positions — along with concrete backends.
//!
//! # Backends
//!
//! - [`CartesianMetric`]: identity mapping, unit bases. Under it the
//!   orthonormalizers reduce to passthrough.
//! - [`ShearedMetric`]: constant shear of `x` along `q`, the smallest
//!   metric whose covariant and contravariant bases differ.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cartesian;
pub mod metric;
pub mod sheared;

#[cfg(test)]
pub(crate) mod compliance;

pub use cartesian::CartesianMetric;
pub use metric::{norm3, Metric};
pub use sheared::ShearedMetric;
