//! Gyre: field reconstruction and snapshot export for curvilinear
//! Yee-grid electromagnetic solvers.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Gyre sub-crates. For most users, adding `gyre` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gyre::prelude::*;
//!
//! // A 4x4x4 grid with trivial (Cartesian) coordinates.
//! let dims = GridDims::new(4, 4, 4).unwrap();
//!
//! // Staggered sample arrays normally come from the time-stepping
//! // solver; here, a constant field. Each edge component has
//! // (N-1) * N * N samples.
//! let ep = vec![1.0; 3 * 4 * 4];
//! let eq = vec![1.0; 3 * 4 * 4];
//! let er = vec![1.0; 3 * 4 * 4];
//! let electric = ElectricSamples::new(dims, &ep, &eq, &er).unwrap();
//!
//! // Reconstruct the physical field without touching disk.
//! let mut out = VectorField::try_new(dims).unwrap();
//! orthonormal_electric(&CartesianMetric, &electric, &mut out).unwrap();
//! assert!(out.x().iter().all(|&v| v == 1.0));
//! ```
//!
//! To write snapshot files instead, build an [`prelude::ExportConfig`]
//! and call [`prelude::export`] once per output timestep; it runs the
//! reconstruction internally and emits one `E` and one `B` record, plus
//! a one-time geometry record at step 0.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | `core` | `gyre-core` | Grid extents, staggered views, output buffers |
//! | `metric` | `gyre-metric` | The `Metric` trait and coordinate backends |
//! | `recon` | `gyre-recon` | Reconstruction and orthonormalization |
//! | `snapshot` | `gyre-snapshot` | Binary snapshot writer/reader |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use gyre_core as core;
pub use gyre_metric as metric;
pub use gyre_recon as recon;
pub use gyre_snapshot as snapshot;

/// Commonly used types and entry points, re-exported flat.
pub mod prelude {
    pub use gyre_core::{
        Axis, ElectricSamples, GridDims, GridError, MagneticSamples, VectorField,
    };
    pub use gyre_metric::{CartesianMetric, Metric, ShearedMetric};
    pub use gyre_recon::{orthonormal_electric, orthonormal_magnetic};
    pub use gyre_snapshot::{
        export, read_record, ExportConfig, RecordKind, SnapshotError, SnapshotRecord,
    };
}
