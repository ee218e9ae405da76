//! Field reconstruction and orthonormalization for the Gyre exporter.
//!
//! Converts the solver's raw staggered, axis-local field samples into
//! orthonormal physical-frame vectors at grid nodes:
//!
//! - [`edge_to_node`] / [`face_to_node`]: boundary-aware 1-D and 2-D
//!   reconstruction of staggered samples to integer node positions.
//! - [`orthonormal_electric`]: edge-staggered covariant components,
//!   projected through the covariant basis.
//! - [`orthonormal_magnetic`]: face-staggered contravariant components,
//!   projected through the contravariant basis.
//!
//! The per-node work is independent across nodes; nothing here performs
//! I/O or holds state across calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod electric;
pub mod interp;
pub mod magnetic;

pub use electric::orthonormal_electric;
pub use interp::{edge_to_node, face_to_node};
pub use magnetic::orthonormal_magnetic;
