//! Record kinds and header metadata.

use gyre_core::GridDims;

/// ASCII magic header at the start of every snapshot file: the marker
/// line, a newline, and a trailing NUL.
pub const HEADER: &[u8; 14] = b"### Gyre ###\n\0";

/// The three snapshot record kinds, one file each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// Physical electric field, sampled at node time `nt·dt`.
    Electric,
    /// Physical magnetic flux density. The solver's leapfrog staggers B
    /// half a step behind E, so its timestamp is `(nt − 0.5)·dt`.
    Magnetic,
    /// Node positions, written once at step 0.
    Geometry,
}

impl RecordKind {
    /// Filename suffix: `E`, `B`, or `G`.
    pub fn suffix(self) -> char {
        match self {
            Self::Electric => 'E',
            Self::Magnetic => 'B',
            Self::Geometry => 'G',
        }
    }

    /// Simulation time recorded for this kind at integer step `nt`.
    pub fn time(self, nt: i32, dt: f64) -> f32 {
        match self {
            Self::Electric | Self::Geometry => (nt as f64 * dt) as f32,
            Self::Magnetic => ((nt as f64 - 0.5) * dt) as f32,
        }
    }
}

/// Decoded fixed-size metadata of one snapshot record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordHeader {
    /// Grid extents `NP, NQ, NR` as stored on disk.
    pub extents: [i32; 3],
    /// Integer step index.
    pub step: i32,
    /// Simulation time at this snapshot.
    pub time: f32,
}

impl RecordHeader {
    /// Header for a record of `kind` at step `nt`.
    pub fn new(dims: GridDims, kind: RecordKind, nt: i32, dt: f64) -> Self {
        Self {
            extents: [dims.np() as i32, dims.nq() as i32, dims.nr() as i32],
            step: nt,
            time: kind.time(nt, dt),
        }
    }

    /// Node count implied by the extents, `None` if any extent is
    /// non-positive or the product overflows.
    pub fn node_count(&self) -> Option<usize> {
        let mut n = 1usize;
        for &e in &self.extents {
            if e <= 0 {
                return None;
            }
            n = n.checked_mul(e as usize)?;
        }
        Some(n)
    }
}
