//! The per-timestep export transaction.

use std::io::BufWriter;

use crate::config::ExportConfig;
use crate::error::SnapshotError;
use crate::record::{RecordHeader, RecordKind};
use crate::writer::{create_record_file, record_path, write_record};
use gyre_core::buffer::check_dims;
use gyre_core::{ElectricSamples, GridDims, MagneticSamples, VectorField};
use gyre_metric::Metric;
use gyre_recon::{orthonormal_electric, orthonormal_magnetic};

/// Physical node positions for the whole grid, from the metric alone.
///
/// Fills a fresh buffer with `position(i, j, k)` per node; no field
/// reconstruction is involved.
pub fn node_positions(metric: &dyn Metric, dims: GridDims) -> Result<VectorField, SnapshotError> {
    let mut out = VectorField::try_new(dims)?;
    for k in 0..dims.nr() {
        for j in 0..dims.nq() {
            for i in 0..dims.np() {
                let pos = metric.position(i as f64, j as f64, k as f64);
                out.set(dims.node_index(i, j, k), pos);
            }
        }
    }
    Ok(out)
}

/// Export one timestep: an `E` record, then a `B` record, and at step 0
/// additionally a one-time `G` (geometry) record.
///
/// The scratch buffer is allocated once and reused for both field
/// records; allocation failure is reported before any file I/O. The two
/// field transactions are sequential: a failure on `E` short-circuits
/// before `B` begins. Any failure aborts the current record, releases
/// buffers and descriptors, and surfaces the underlying error; partially
/// written files are not rolled back.
pub fn export(
    config: &ExportConfig,
    metric: &dyn Metric,
    electric: &ElectricSamples<'_>,
    magnetic: &MagneticSamples<'_>,
    nt: i32,
) -> Result<(), SnapshotError> {
    let dims = config.dims();
    let mut scratch = VectorField::try_new(dims)?;
    check_dims(dims, electric.dims())?;
    check_dims(dims, magnetic.dims())?;

    orthonormal_electric(metric, electric, &mut scratch)?;
    write_record_file(config, nt, RecordKind::Electric, &scratch)?;

    orthonormal_magnetic(metric, magnetic, &mut scratch)?;
    write_record_file(config, nt, RecordKind::Magnetic, &scratch)?;

    if nt == 0 {
        drop(scratch);
        let positions = node_positions(metric, dims)?;
        write_record_file(config, nt, RecordKind::Geometry, &positions)?;
    }
    Ok(())
}

/// One file-write transaction: format and length-check the path, open
/// create-if-absent, stream the record, close on drop.
fn write_record_file(
    config: &ExportConfig,
    nt: i32,
    kind: RecordKind,
    field: &VectorField,
) -> Result<(), SnapshotError> {
    let path = record_path(config.out_dir(), nt, kind)?;
    let header = RecordHeader::new(config.dims(), kind, nt, config.dt());
    let file = create_record_file(&path)?;
    let mut w = BufWriter::new(file);
    write_record(&mut w, &header, field)
}
