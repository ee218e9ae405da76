//! Boundary-aware reconstruction of staggered samples to grid nodes.
//!
//! Staggered (half-cell offset) schemes have no sample exactly at a
//! boundary node, so reconstruction interpolates between the bracketing
//! samples in the interior and linearly *extrapolates* from the two
//! nearest samples at the domain boundary. Both rules are exact for data
//! affine in the staggered coordinate, which preserves second-order
//! accuracy without ghost cells.

/// Bounds-checked (debug) signed indexing into a sample slice.
fn at(a: &[f64], idx: isize) -> f64 {
    debug_assert!(
        idx >= 0 && (idx as usize) < a.len(),
        "staggered index {idx} out of bounds for {} samples",
        a.len()
    );
    a[idx as usize]
}

/// Reconstruct an edge-staggered value at node `i` along one axis.
///
/// `a` is the staggered array, `n` the node extent of the target axis,
/// `ns` the element stride between consecutive staggered samples along
/// it, and `l` the flat offset of the *lower* staggered neighbour (the
/// sample at coordinate `i - 0.5`). `l` is negative exactly when `i == 0`,
/// where it is never dereferenced.
///
/// - interior: mean of the bracketing samples,
/// - `i == 0`: `1.5·a[l+ns] − 0.5·a[l+2·ns]`,
/// - `i == n-1`: `−0.5·a[l−ns] + 1.5·a[l]`.
///
/// With `n == 2` both nodes are boundaries and only one staggered layer
/// exists, so there is no second sample to extrapolate through; the value
/// degenerates to that single sample (exact for constant data).
pub fn edge_to_node(a: &[f64], i: usize, n: usize, l: isize, ns: usize) -> f64 {
    debug_assert!(i < n && n >= 2);
    let ns = ns as isize;
    if i == 0 {
        if n == 2 {
            return at(a, l + ns);
        }
        1.5 * at(a, l + ns) - 0.5 * at(a, l + 2 * ns)
    } else if i == n - 1 {
        if n == 2 {
            return at(a, l);
        }
        -0.5 * at(a, l - ns) + 1.5 * at(a, l)
    } else {
        0.5 * at(a, l) + 0.5 * at(a, l + ns)
    }
}

/// Reconstruct a face-staggered value at a node across two axes.
///
/// Collapses the inner-axis staggering with [`edge_to_node`] at the two
/// relevant outer-axis layers, then applies the same boundary-aware rule
/// along the outer axis: bilinear reconstruction, with extrapolation on
/// whichever axes sit on a domain boundary.
///
/// `i1`/`n1`/`ns1` describe the outer axis, `i2`/`n2`/`ns2` the inner
/// axis; `l` is the flat offset of the sample lower-adjacent on *both*
/// axes.
pub fn face_to_node(
    a: &[f64],
    i1: usize,
    n1: usize,
    ns1: usize,
    i2: usize,
    n2: usize,
    ns2: usize,
    l: isize,
) -> f64 {
    debug_assert!(i1 < n1 && n1 >= 2);
    let s1 = ns1 as isize;
    if i1 == 0 {
        if n1 == 2 {
            return edge_to_node(a, i2, n2, l + s1, ns2);
        }
        let near = edge_to_node(a, i2, n2, l + s1, ns2);
        let far = edge_to_node(a, i2, n2, l + 2 * s1, ns2);
        1.5 * near - 0.5 * far
    } else if i1 == n1 - 1 {
        if n1 == 2 {
            return edge_to_node(a, i2, n2, l, ns2);
        }
        let far = edge_to_node(a, i2, n2, l - s1, ns2);
        let near = edge_to_node(a, i2, n2, l, ns2);
        -0.5 * far + 1.5 * near
    } else {
        0.5 * edge_to_node(a, i2, n2, l, ns2) + 0.5 * edge_to_node(a, i2, n2, l + s1, ns2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Staggered samples of the affine function `α + β·s` at coordinates
    /// `s = 0.5, 1.5, ..., n - 1.5` (unit stride).
    fn affine_line(n: usize, alpha: f64, beta: f64) -> Vec<f64> {
        (0..n - 1).map(|h| alpha + beta * (h as f64 + 0.5)).collect()
    }

    fn edge_at(a: &[f64], i: usize, n: usize) -> f64 {
        // Unit stride: the lower neighbour of node i is sample i-1.
        edge_to_node(a, i, n, i as isize - 1, 1)
    }

    // ── 1-D reconstruction ──────────────────────────────────────

    #[test]
    fn interior_is_mean_of_bracketing_samples() {
        let a = [2.0, 10.0, 4.0];
        assert_eq!(edge_at(&a, 1, 4), 0.5 * (2.0 + 10.0));
        assert_eq!(edge_at(&a, 2, 4), 0.5 * (10.0 + 4.0));
    }

    #[test]
    fn boundary_extrapolates_from_two_nearest_samples() {
        let a = [1.0, 3.0, 7.0];
        // Lower: 1.5*a[0] - 0.5*a[1].
        assert_eq!(edge_at(&a, 0, 4), 1.5 * 1.0 - 0.5 * 3.0);
        // Upper: -0.5*a[1] + 1.5*a[2].
        assert_eq!(edge_at(&a, 3, 4), -0.5 * 3.0 + 1.5 * 7.0);
    }

    #[test]
    fn two_node_axis_degenerates_to_single_sample() {
        let a = [5.0];
        assert_eq!(edge_at(&a, 0, 2), 5.0);
        assert_eq!(edge_at(&a, 1, 2), 5.0);
    }

    #[test]
    fn affine_data_reconstructs_exactly_everywhere() {
        let (n, alpha, beta) = (7, 3.0, -0.75);
        let a = affine_line(n, alpha, beta);
        for i in 0..n {
            let expected = alpha + beta * i as f64;
            let got = edge_at(&a, i, n);
            assert!(
                (got - expected).abs() < 1e-12,
                "node {i}: {got} != {expected}"
            );
        }
    }

    proptest! {
        #[test]
        fn affine_exactness_any_coefficients(
            n in 3usize..32,
            alpha in -100.0f64..100.0,
            beta in -100.0f64..100.0,
        ) {
            let a = affine_line(n, alpha, beta);
            for i in 0..n {
                let expected = alpha + beta * i as f64;
                let got = edge_at(&a, i, n);
                prop_assert!((got - expected).abs() < 1e-9 * (1.0 + expected.abs()));
            }
        }
    }

    // ── 2-D reconstruction ──────────────────────────────────────

    /// Face samples of `α + β·u + γ·v` at `(u, v) = (uh+0.5, vh+0.5)`,
    /// laid out `uh + (nu-1)*vh` (unit outer stride, `nu-1` inner stride).
    fn affine_plane(nu: usize, nv: usize, alpha: f64, beta: f64, gamma: f64) -> Vec<f64> {
        let mut a = Vec::with_capacity((nu - 1) * (nv - 1));
        for vh in 0..nv - 1 {
            for uh in 0..nu - 1 {
                a.push(alpha + beta * (uh as f64 + 0.5) + gamma * (vh as f64 + 0.5));
            }
        }
        a
    }

    fn face_at(a: &[f64], u: usize, nu: usize, v: usize, nv: usize) -> f64 {
        let l = (u as isize - 1) + (nu as isize - 1) * (v as isize - 1);
        face_to_node(a, u, nu, 1, v, nv, nu - 1, l)
    }

    #[test]
    fn bi_affine_data_reconstructs_exactly_including_corners() {
        let (nu, nv) = (5, 4);
        let (alpha, beta, gamma) = (1.0, 2.0, -3.0);
        let a = affine_plane(nu, nv, alpha, beta, gamma);
        for v in 0..nv {
            for u in 0..nu {
                let expected = alpha + beta * u as f64 + gamma * v as f64;
                let got = face_at(&a, u, nu, v, nv);
                assert!(
                    (got - expected).abs() < 1e-12,
                    "({u},{v}): {got} != {expected}"
                );
            }
        }
    }

    #[test]
    fn two_by_two_plane_degenerates_to_single_sample() {
        let a = [5.0];
        for v in 0..2 {
            for u in 0..2 {
                assert_eq!(face_at(&a, u, 2, v, 2), 5.0);
            }
        }
    }

    proptest! {
        #[test]
        fn bi_affine_exactness_any_coefficients(
            nu in 3usize..12,
            nv in 3usize..12,
            alpha in -10.0f64..10.0,
            beta in -10.0f64..10.0,
            gamma in -10.0f64..10.0,
        ) {
            let a = affine_plane(nu, nv, alpha, beta, gamma);
            for v in 0..nv {
                for u in 0..nu {
                    let expected = alpha + beta * u as f64 + gamma * v as f64;
                    let got = face_at(&a, u, nu, v, nv);
                    prop_assert!((got - expected).abs() < 1e-9 * (1.0 + expected.abs()));
                }
            }
        }
    }
}
