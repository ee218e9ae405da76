//! Borrowed views over the solver's staggered sample arrays.
//!
//! The time-stepping solver owns six component arrays with Yee-type
//! staggering. Electric components are edge-centered: each is shifted by a
//! half cell along its *own* axis, so it has one fewer sample layer along
//! that axis and full node density along the other two. Magnetic components
//! are face-centered: each is shifted by a half cell along *both other*
//! axes.
//!
//! # Layouts
//!
//! Writing `u`, `v` for the two transverse axes of component axis `w`
//! (in cyclic order `p → q → r → p`), the flat layouts are:
//!
//! - edge component along `w`: `index = u + Nu*(v + Nv*w_half)`,
//!   `w_half ∈ [0, Nw-1)` — the own-axis layer varies slowest.
//! - face component along `w`: `index = u_half + (Nu-1)*(v_half + (Nv-1)*w)`,
//!   `u_half ∈ [0, Nu-1)`, `v_half ∈ [0, Nv-1)`.
//!
//! These formulas are invariants shared with the reconstruction stage; the
//! [`edge_index`]/[`face_index`] helpers are the single authoritative
//! encoding of them.

use crate::error::GridError;
use crate::grid::{Axis, GridDims};

/// Element count of an edge-staggered component along `axis`:
/// `(N_axis - 1) * N_u * N_v`. `None` on overflow.
pub fn edge_sample_count(dims: &GridDims, axis: Axis) -> Option<usize> {
    let u = dims.extent(axis.next());
    let v = dims.extent(axis.next().next());
    (dims.extent(axis) - 1).checked_mul(u)?.checked_mul(v)
}

/// Element count of a face-staggered component along `axis`:
/// `(N_u - 1) * (N_v - 1) * N_axis`. `None` on overflow.
pub fn face_sample_count(dims: &GridDims, axis: Axis) -> Option<usize> {
    let u = dims.extent(axis.next());
    let v = dims.extent(axis.next().next());
    (u - 1).checked_mul(v - 1)?.checked_mul(dims.extent(axis))
}

/// Flat index into an edge-staggered component array.
///
/// `half` is the own-axis sample layer (`0 ..= N_axis - 2`, sample sits at
/// coordinate `half + 0.5`); `u`, `v` are node indices along the first and
/// second transverse axis in cyclic order.
pub fn edge_index(dims: &GridDims, axis: Axis, half: usize, u: usize, v: usize) -> usize {
    let nu = dims.extent(axis.next());
    let nv = dims.extent(axis.next().next());
    debug_assert!(half < dims.extent(axis) - 1 && u < nu && v < nv);
    u + nu * (v + nv * half)
}

/// Flat index into a face-staggered component array.
///
/// `u_half`, `v_half` are the transverse sample layers (samples sit at
/// `u_half + 0.5`, `v_half + 0.5`); `w` is the node index along the
/// component's own axis.
pub fn face_index(dims: &GridDims, axis: Axis, u_half: usize, v_half: usize, w: usize) -> usize {
    let nu = dims.extent(axis.next());
    let nv = dims.extent(axis.next().next());
    debug_assert!(u_half < nu - 1 && v_half < nv - 1 && w < dims.extent(axis));
    u_half + (nu - 1) * (v_half + (nv - 1) * w)
}

fn check_len(
    component: &'static str,
    data: &[f64],
    expected: Option<usize>,
) -> Result<(), GridError> {
    let expected = expected.ok_or(GridError::SampleCountOverflow { component })?;
    if data.len() != expected {
        return Err(GridError::SampleCountMismatch {
            component,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// The three edge-centered covariant electric component arrays.
///
/// Construction validates each array's length against the grid extents,
/// so the reconstruction loops can rely on in-bounds index arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct ElectricSamples<'a> {
    dims: GridDims,
    ep: &'a [f64],
    eq: &'a [f64],
    er: &'a [f64],
}

impl<'a> ElectricSamples<'a> {
    /// Wrap the solver's covariant `Ep`, `Eq`, `Er` arrays.
    pub fn new(
        dims: GridDims,
        ep: &'a [f64],
        eq: &'a [f64],
        er: &'a [f64],
    ) -> Result<Self, GridError> {
        check_len("Ep", ep, edge_sample_count(&dims, Axis::P))?;
        check_len("Eq", eq, edge_sample_count(&dims, Axis::Q))?;
        check_len("Er", er, edge_sample_count(&dims, Axis::R))?;
        Ok(Self { dims, ep, eq, er })
    }

    /// Grid extents these samples were validated against.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Covariant component along the given axis.
    pub fn component(&self, axis: Axis) -> &'a [f64] {
        match axis {
            Axis::P => self.ep,
            Axis::Q => self.eq,
            Axis::R => self.er,
        }
    }
}

/// The three face-centered contravariant magnetic component arrays.
#[derive(Clone, Copy, Debug)]
pub struct MagneticSamples<'a> {
    dims: GridDims,
    bp: &'a [f64],
    bq: &'a [f64],
    br: &'a [f64],
}

impl<'a> MagneticSamples<'a> {
    /// Wrap the solver's contravariant `Bp`, `Bq`, `Br` arrays.
    pub fn new(
        dims: GridDims,
        bp: &'a [f64],
        bq: &'a [f64],
        br: &'a [f64],
    ) -> Result<Self, GridError> {
        check_len("Bp", bp, face_sample_count(&dims, Axis::P))?;
        check_len("Bq", bq, face_sample_count(&dims, Axis::Q))?;
        check_len("Br", br, face_sample_count(&dims, Axis::R))?;
        Ok(Self { dims, bp, bq, br })
    }

    /// Grid extents these samples were validated against.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Contravariant component along the given axis.
    pub fn component(&self, axis: Axis) -> &'a [f64] {
        match axis {
            Axis::P => self.bp,
            Axis::Q => self.bq,
            Axis::R => self.br,
        }
    }
}
