//! The core `Metric` trait.

use gyre_core::Axis;

/// Euclidean norm of a 3-vector.
pub fn norm3(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Local coordinate metric of the curvilinear grid.
///
/// All queries are pure functions of a *continuous* coordinate `(p, q, r)`
/// — the reconstruction stage evaluates them at integer node positions,
/// but nothing in the contract requires that. Implementations carry no
/// mutable state and results are recomputed per node; no caching is
/// assumed.
///
/// # Object safety
///
/// The trait is designed for use as `&dyn Metric`: the per-node transform
/// is dominated by floating-point work, not dispatch, so runtime dispatch
/// keeps the export entry points free of type parameters.
///
/// # Contract
///
/// The covariant basis `e_i = ∂x/∂c_i` and the contravariant basis `e^i`
/// must be mutually dual: `e_i · e^j = δ_ij`. The provided basis-length
/// methods derive from the vectors; override them only with values that
/// stay consistent.
pub trait Metric: Send + Sync {
    /// Cartesian components of the covariant basis vector along `axis`.
    fn covariant_basis(&self, axis: Axis, p: f64, q: f64, r: f64) -> [f64; 3];

    /// Cartesian components of the contravariant basis vector along `axis`.
    fn contravariant_basis(&self, axis: Axis, p: f64, q: f64, r: f64) -> [f64; 3];

    /// Physical position of the coordinate.
    fn position(&self, p: f64, q: f64, r: f64) -> [f64; 3];

    /// Length of the covariant basis vector along `axis`.
    fn covariant_len(&self, axis: Axis, p: f64, q: f64, r: f64) -> f64 {
        norm3(self.covariant_basis(axis, p, q, r))
    }

    /// Length of the contravariant basis vector along `axis`.
    fn contravariant_len(&self, axis: Axis, p: f64, q: f64, r: f64) -> f64 {
        norm3(self.contravariant_basis(axis, p, q, r))
    }
}
