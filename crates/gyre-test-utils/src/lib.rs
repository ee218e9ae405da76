//! Test fixtures for Gyre development.
//!
//! Builders for staggered sample arrays evaluated from closures of the
//! continuous grid coordinate, plus a self-cleaning scratch directory for
//! snapshot-file tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use gyre_core::stagger::{
    edge_index, edge_sample_count, face_index, face_sample_count,
};
use gyre_core::{Axis, GridDims};

/// Build the three edge-staggered electric sample arrays by evaluating
/// each closure at its component's staggered locations: `Ep` at
/// `(ih+0.5, j, k)`, `Eq` at `(i, jh+0.5, k)`, `Er` at `(i, j, kh+0.5)`.
pub fn electric_from(
    dims: GridDims,
    fp: impl Fn(f64, f64, f64) -> f64,
    fq: impl Fn(f64, f64, f64) -> f64,
    fr: impl Fn(f64, f64, f64) -> f64,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let (np, nq, nr) = (dims.np(), dims.nq(), dims.nr());

    let mut ep = vec![0.0; edge_sample_count(&dims, Axis::P).unwrap()];
    for ih in 0..np - 1 {
        for k in 0..nr {
            for j in 0..nq {
                ep[edge_index(&dims, Axis::P, ih, j, k)] =
                    fp(ih as f64 + 0.5, j as f64, k as f64);
            }
        }
    }

    let mut eq = vec![0.0; edge_sample_count(&dims, Axis::Q).unwrap()];
    for jh in 0..nq - 1 {
        for i in 0..np {
            for k in 0..nr {
                eq[edge_index(&dims, Axis::Q, jh, k, i)] =
                    fq(i as f64, jh as f64 + 0.5, k as f64);
            }
        }
    }

    let mut er = vec![0.0; edge_sample_count(&dims, Axis::R).unwrap()];
    for kh in 0..nr - 1 {
        for j in 0..nq {
            for i in 0..np {
                er[edge_index(&dims, Axis::R, kh, i, j)] =
                    fr(i as f64, j as f64, kh as f64 + 0.5);
            }
        }
    }

    (ep, eq, er)
}

/// Build the three face-staggered magnetic sample arrays by evaluating
/// each closure at its component's staggered locations: `Bp` at
/// `(i, jh+0.5, kh+0.5)`, `Bq` at `(ih+0.5, j, kh+0.5)`, `Br` at
/// `(ih+0.5, jh+0.5, k)`.
pub fn magnetic_from(
    dims: GridDims,
    fp: impl Fn(f64, f64, f64) -> f64,
    fq: impl Fn(f64, f64, f64) -> f64,
    fr: impl Fn(f64, f64, f64) -> f64,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let (np, nq, nr) = (dims.np(), dims.nq(), dims.nr());

    let mut bp = vec![0.0; face_sample_count(&dims, Axis::P).unwrap()];
    for i in 0..np {
        for kh in 0..nr - 1 {
            for jh in 0..nq - 1 {
                bp[face_index(&dims, Axis::P, jh, kh, i)] =
                    fp(i as f64, jh as f64 + 0.5, kh as f64 + 0.5);
            }
        }
    }

    let mut bq = vec![0.0; face_sample_count(&dims, Axis::Q).unwrap()];
    for j in 0..nq {
        for ih in 0..np - 1 {
            for kh in 0..nr - 1 {
                bq[face_index(&dims, Axis::Q, kh, ih, j)] =
                    fq(ih as f64 + 0.5, j as f64, kh as f64 + 0.5);
            }
        }
    }

    let mut br = vec![0.0; face_sample_count(&dims, Axis::R).unwrap()];
    for k in 0..nr {
        for jh in 0..nq - 1 {
            for ih in 0..np - 1 {
                br[face_index(&dims, Axis::R, ih, jh, k)] =
                    fr(ih as f64 + 0.5, jh as f64 + 0.5, k as f64);
            }
        }
    }

    (bp, bq, br)
}

/// All three electric sample arrays filled with one constant.
pub fn const_electric(dims: GridDims, v: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    electric_from(dims, |_, _, _| v, |_, _, _| v, |_, _, _| v)
}

/// All three magnetic sample arrays filled with one constant.
pub fn const_magnetic(dims: GridDims, v: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    magnetic_from(dims, |_, _, _| v, |_, _, _| v, |_, _, _| v)
}

/// Enumerate `(flat_index, (p, q, r))` for every node, in storage order.
pub fn node_values(dims: GridDims) -> Vec<(usize, (f64, f64, f64))> {
    let mut out = Vec::with_capacity(dims.checked_node_count().unwrap());
    for k in 0..dims.nr() {
        for j in 0..dims.nq() {
            for i in 0..dims.np() {
                out.push((
                    dims.node_index(i, j, k),
                    (i as f64, j as f64, k as f64),
                ));
            }
        }
    }
    out
}

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A unique per-test output directory under the system temp dir,
/// removed (with its contents) on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create a fresh directory tagged with the test name.
    pub fn new(tag: &str) -> Self {
        let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "gyre-{tag}-{}-{n}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        // Snapshot files are created read-only; make them deletable first.
        if let Ok(entries) = std::fs::read_dir(&self.path) {
            for entry in entries.flatten() {
                if let Ok(meta) = entry.metadata() {
                    let mut perms = meta.permissions();
                    #[allow(clippy::permissions_set_readonly_false)]
                    perms.set_readonly(false);
                    let _ = std::fs::set_permissions(entry.path(), perms);
                }
            }
        }
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
