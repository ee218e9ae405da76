//! Magnetic-field orthonormalization.
//!
//! Structurally the dual of the electric path: magnetic components live
//! on cell faces, staggered across the two axes transverse to their own,
//! so reconstruction is 2-D and the projection runs through the
//! contravariant basis.

use crate::interp::face_to_node;
use gyre_core::buffer::check_dims;
use gyre_core::{Axis, GridError, MagneticSamples, VectorField};
use gyre_metric::Metric;

/// Compute the physical (X, Y, Z) magnetic flux density at every node.
///
/// Per node: reconstruct each contravariant component with
/// [`face_to_node`] across its two transverse axes, scale by the inverse
/// contravariant basis length, then project through the contravariant
/// basis matrix.
pub fn orthonormal_magnetic(
    metric: &dyn Metric,
    samples: &MagneticSamples<'_>,
    out: &mut VectorField,
) -> Result<(), GridError> {
    check_dims(out.dims(), samples.dims())?;
    let dims = out.dims();
    let (np, nq, nr) = (dims.np(), dims.nq(), dims.nr());
    let bp = samples.component(Axis::P);
    let bq = samples.component(Axis::Q);
    let br = samples.component(Axis::R);

    for k in 0..nr {
        for j in 0..nq {
            for i in 0..np {
                let (p, q, r) = (i as f64, j as f64, k as f64);
                let (pi, qi, ri) = (i as isize, j as isize, k as isize);
                let (snp, snq, snr) = (np as isize, nq as isize, nr as isize);

                // Offsets of the sample lower-adjacent on both transverse
                // axes (see gyre-core::stagger for the layouts).
                let l0 = (qi - 1) + (snq - 1) * ((ri - 1) + (snr - 1) * pi);
                let l1 = (ri - 1) + (snr - 1) * ((pi - 1) + (snp - 1) * qi);
                let l2 = (pi - 1) + (snp - 1) * ((qi - 1) + (snq - 1) * ri);

                let mut b = [
                    // Bp: over the q-r face.
                    face_to_node(bp, j, nq, 1, k, nr, nq - 1, l0),
                    // Bq: over the r-p face.
                    face_to_node(bq, k, nr, 1, i, np, nr - 1, l1),
                    // Br: over the p-q face.
                    face_to_node(br, i, np, 1, j, nq, np - 1, l2),
                ];

                for axis in Axis::ALL {
                    b[axis.index()] /= metric.contravariant_len(axis, p, q, r);
                }

                let mut v = [0.0f64; 3];
                for axis in Axis::ALL {
                    let basis = metric.contravariant_basis(axis, p, q, r);
                    let c = b[axis.index()];
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
