//! Identity (Cartesian) metric.

use crate::metric::Metric;
use gyre_core::Axis;

/// Trivial metric: `(p, q, r)` maps directly to `(x, y, z)` with unit
/// basis vectors, and the covariant and contravariant bases coincide.
///
/// Under this metric the orthonormalization stage is an exact passthrough,
/// which makes it the reference point for transform tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartesianMetric;

fn unit(axis: Axis) -> [f64; 3] {
    let mut v = [0.0; 3];
    v[axis.index()] = 1.0;
    v
}

impl Metric for CartesianMetric {
    fn covariant_basis(&self, axis: Axis, _p: f64, _q: f64, _r: f64) -> [f64; 3] {
        unit(axis)
    }

    fn contravariant_basis(&self, axis: Axis, _p: f64, _q: f64, _r: f64) -> [f64; 3] {
        unit(axis)
    }

    fn position(&self, p: f64, q: f64, r: f64) -> [f64; 3] {
        [p, q, r]
    }
}
