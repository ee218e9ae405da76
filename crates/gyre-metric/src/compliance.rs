//! Metric trait compliance test helpers.
//!
//! These functions verify that a [`Metric`] implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (CartesianMetric, ShearedMetric).

use crate::metric::{norm3, Metric};
use gyre_core::Axis;

/// Sample coordinates covering the origin, integer nodes, and
/// half-integer staggered locations.
fn sample_coords() -> Vec<(f64, f64, f64)> {
    vec![
        (0.0, 0.0, 0.0),
        (1.0, 2.0, 3.0),
        (0.5, 1.5, 2.5),
        (7.0, 0.0, 4.0),
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Assert that the covariant and contravariant bases are mutually dual:
/// `e_i · e^j = δ_ij` at every sample coordinate.
pub fn assert_bases_dual(metric: &dyn Metric) {
    for (p, q, r) in sample_coords() {
        for i in Axis::ALL {
            for j in Axis::ALL {
                let cov = metric.covariant_basis(i, p, q, r);
                let con = metric.contravariant_basis(j, p, q, r);
                let expected = if i == j { 1.0 } else { 0.0 };
                let d = dot(cov, con);
                assert!(
                    (d - expected).abs() < 1e-12,
                    "e_{i} . e^{j} = {d} at ({p},{q},{r}), expected {expected}"
                );
            }
        }
    }
}

/// Assert that the basis-length methods agree with the basis vectors.
pub fn assert_lengths_consistent(metric: &dyn Metric) {
    for (p, q, r) in sample_coords() {
        for axis in Axis::ALL {
            let cov = norm3(metric.covariant_basis(axis, p, q, r));
            let con = norm3(metric.contravariant_basis(axis, p, q, r));
            assert!(
                (metric.covariant_len(axis, p, q, r) - cov).abs() < 1e-12,
                "covariant_len({axis}) inconsistent at ({p},{q},{r})"
            );
            assert!(
                (metric.contravariant_len(axis, p, q, r) - con).abs() < 1e-12,
                "contravariant_len({axis}) inconsistent at ({p},{q},{r})"
            );
        }
    }
}

/// Assert that the covariant basis matches the central finite difference
/// of [`Metric::position`] along each axis.
pub fn assert_covariant_basis_is_position_derivative(metric: &dyn Metric) {
    let h = 1e-6;
    for (p, q, r) in sample_coords() {
        for axis in Axis::ALL {
            let (dp, dq, dr) = match axis {
                Axis::P => (h, 0.0, 0.0),
                Axis::Q => (0.0, h, 0.0),
                Axis::R => (0.0, 0.0, h),
            };
            let hi = metric.position(p + dp, q + dq, r + dr);
            let lo = metric.position(p - dp, q - dq, r - dr);
            let basis = metric.covariant_basis(axis, p, q, r);
            for c in 0..3 {
                let fd = (hi[c] - lo[c]) / (2.0 * h);
                assert!(
                    (fd - basis[c]).abs() < 1e-6,
                    "d position/d{axis} component {c} = {fd}, basis gives {} at ({p},{q},{r})",
                    basis[c]
                );
            }
        }
    }
}
