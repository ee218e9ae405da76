//! Constant-shear metric.

use crate::metric::Metric;
use gyre_core::Axis;

/// Shear of the `x` coordinate along `q`: `x = p + α·q`, `y = q`, `z = r`.
///
/// The simplest metric with a non-diagonal basis matrix: the covariant
/// basis along `q` is `(α, 1, 0)` and the dual contravariant basis along
/// `p` is `(1, -α, 0)`. Because the two bases differ, this backend
/// exercises the projection paths that [`CartesianMetric`] leaves inert.
///
/// [`CartesianMetric`]: crate::CartesianMetric
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShearedMetric {
    alpha: f64,
}

impl ShearedMetric {
    /// Construct with shear factor `alpha`.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// The shear factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Metric for ShearedMetric {
    fn covariant_basis(&self, axis: Axis, _p: f64, _q: f64, _r: f64) -> [f64; 3] {
        match axis {
            Axis::P => [1.0, 0.0, 0.0],
            Axis::Q => [self.alpha, 1.0, 0.0],
            Axis::R => [0.0, 0.0, 1.0],
        }
    }

    fn contravariant_basis(&self, axis: Axis, _p: f64, _q: f64, _r: f64) -> [f64; 3] {
        match axis {
            Axis::P => [1.0, -self.alpha, 0.0],
            Axis::Q => [0.0, 1.0, 0.0],
            Axis::R => [0.0, 0.0, 1.0],
        }
    }

    fn position(&self, p: f64, q: f64, r: f64) -> [f64; 3] {
        [p + self.alpha * q, q, r]
    }
}
