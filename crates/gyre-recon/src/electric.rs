//! Electric-field orthonormalization.

use crate::interp::edge_to_node;
use gyre_core::buffer::check_dims;
use gyre_core::{Axis, GridError, ElectricSamples, VectorField};
use gyre_metric::Metric;

/// Compute the physical (X, Y, Z) electric field at every grid node.
///
/// Per node: reconstruct each covariant component to the node with
/// [`edge_to_node`] along its own staggering axis, scale by the inverse
/// covariant basis length, then project through the covariant basis
/// matrix. Purely numeric; the only failure mode is samples validated
/// against different extents than `out` was allocated for.
///
/// Each node writes a distinct output slot, so the loop may be split
/// across nodes freely.
pub fn orthonormal_electric(
    metric: &dyn Metric,
    samples: &ElectricSamples<'_>,
    out: &mut VectorField,
) -> Result<(), GridError> {
    check_dims(out.dims(), samples.dims())?;
    let dims = out.dims();
    let (np, nq, nr) = (dims.np(), dims.nq(), dims.nr());
    let ep = samples.component(Axis::P);
    let eq = samples.component(Axis::Q);
    let er = samples.component(Axis::R);

    for k in 0..nr {
        for j in 0..nq {
            for i in 0..np {
                let (p, q, r) = (i as f64, j as f64, k as f64);
                let (pi, qi, ri) = (i as isize, j as isize, k as isize);
                let (snp, snq, snr) = (np as isize, nq as isize, nr as isize);

                // Offsets of the lower staggered neighbour in each
                // component's own layout (see gyre-core::stagger).
                let l0 = qi + snq * (ri + snr * (pi - 1));
                let l1 = ri + snr * (pi + snp * (qi - 1));
                let l2 = pi + snp * (qi + snq * (ri - 1));

                let mut e = [
                    edge_to_node(ep, i, np, l0, nq * nr),
                    edge_to_node(eq, j, nq, l1, nr * np),
                    edge_to_node(er, k, nr, l2, np * nq),
                ];

                // Raw grid-unit components to scaled unphysical components.
                for axis in Axis::ALL {
                    e[axis.index()] /= metric.covariant_len(axis, p, q, r);
                }

                // Project through the covariant basis matrix.
                let mut v = [0.0f64; 3];
                for axis in Axis::ALL {
                    let basis = metric.covariant_basis(axis, p, q, r);
                    let c = e[axis.index()];
                    v[0] += basis[0] * c;
                    v[1] += basis[1] * c;
                    v[2] += basis[2] * c;
                }

                out.set(dims.node_index(i, j, k), v);
            }
        }
    }
    Ok(())
}
