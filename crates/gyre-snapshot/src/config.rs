//! Export configuration.

use gyre_core::GridDims;
use std::path::{Path, PathBuf};

/// Environment variable naming the snapshot output directory.
pub const OUT_PATH_ENV: &str = "GYRE_OUT_PATH";

/// Maximum length in bytes of a formatted snapshot path.
///
/// Checked before any file is opened; longer paths fail with
/// [`SnapshotError::PathTooLong`](crate::SnapshotError::PathTooLong).
pub const MAX_PATH_LEN: usize = 1024;

/// Immutable per-run export configuration.
///
/// Grid extents and the timestep size are fixed for the lifetime of a
/// run; the config is threaded explicitly through every export call
/// rather than held in process-global state.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    dims: GridDims,
    dt: f64,
    out_dir: PathBuf,
}

impl ExportConfig {
    /// Construct with an explicit output directory.
    pub fn new(dims: GridDims, dt: f64, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            dims,
            dt,
            out_dir: out_dir.into(),
        }
    }

    /// Construct with the output directory taken from [`OUT_PATH_ENV`],
    /// falling back silently to the current directory when unset.
    pub fn from_env(dims: GridDims, dt: f64) -> Self {
        let out_dir = std::env::var_os(OUT_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dims, dt, out_dir)
    }

    /// Grid extents.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Timestep size in simulation units.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Snapshot output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
