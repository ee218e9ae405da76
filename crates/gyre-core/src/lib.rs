//! Core grid types for the Gyre field exporter.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the structured-grid extents and node flattening, the borrowed views
//! over the solver's staggered sample arrays, and the dense node-centered
//! output buffers that the reconstruction stage fills.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod grid;
pub mod stagger;

pub use buffer::{AllocError, VectorField};
pub use error::GridError;
pub use grid::{Axis, GridDims};
pub use stagger::{ElectricSamples, MagneticSamples};
