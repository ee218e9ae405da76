//! Snapshot record reader.
//!
//! The writer's counterpart, used by the round-trip tests and offline
//! tooling. Reads a single complete record from any `Read` source.

use std::io::Read;

use crate::codec::{decode_header, read_f32_vec_le};
use crate::error::SnapshotError;
use crate::record::RecordHeader;

/// A fully decoded snapshot record.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotRecord {
    /// Fixed metadata: extents, step index, timestamp.
    pub header: RecordHeader,
    /// First (X or P-position) component, node flattening order.
    pub x: Vec<f32>,
    /// Second (Y or Q-position) component.
    pub y: Vec<f32>,
    /// Third (Z or R-position) component.
    pub z: Vec<f32>,
}

/// Read one complete record, validating the magic header and extents.
///
/// Generic over `R: Read`; wrap files in a `BufReader`.
pub fn read_record<R: Read>(r: &mut R) -> Result<SnapshotRecord, SnapshotError> {
    let header = decode_header(r)?;
    let n = header.node_count().ok_or(SnapshotError::InvalidHeader)?;
    let x = read_f32_vec_le(r, n)?;
    let y = read_f32_vec_le(r, n)?;
    let z = read_f32_vec_le(r, n)?;
    Ok(SnapshotRecord { header, x, y, z })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordKind;
    use crate::writer::write_record;
    use gyre_core::{GridDims, VectorField};

    #[test]
    fn write_then_read_recovers_metadata_and_components() {
        let dims = GridDims::new(3, 2, 2).unwrap();
        let mut field = VectorField::try_new(dims).unwrap();
        for l in 0..field.len() {
            field.set(l, [l as f64, -(l as f64), 0.5 * l as f64]);
        }
        let header = RecordHeader::new(dims, RecordKind::Magnetic, 9, 0.25);

        let mut buf = Vec::new();
        write_record(&mut buf, &header, &field).unwrap();
        let record = read_record(&mut buf.as_slice()).unwrap();

        assert_eq!(record.header, header);
        assert_eq!(record.header.extents, [3, 2, 2]);
        assert_eq!(record.header.step, 9);
        assert_eq!(record.header.time, (8.5f64 * 0.25) as f32);
        assert_eq!(record.x, field.x());
        assert_eq!(record.y, field.y());
        assert_eq!(record.z, field.z());
    }

    #[test]
    fn negative_extent_is_an_invalid_header() {
        let header = RecordHeader {
            extents: [2, -2, 2],
            step: 0,
            time: 0.0,
        };
        let mut buf = Vec::new();
        crate::codec::encode_header(&mut buf, &header).unwrap();
        assert!(matches!(
            read_record(&mut buf.as_slice()),
            Err(SnapshotError::InvalidHeader)
        ));
    }

    #[test]
    fn truncated_component_data_is_an_io_error() {
        let dims = GridDims::new(2, 2, 2).unwrap();
        let field = VectorField::try_new(dims).unwrap();
        let header = RecordHeader::new(dims, RecordKind::Electric, 0, 0.1);
        let mut buf = Vec::new();
        write_record(&mut buf, &header, &field).unwrap();
        buf.truncate(buf.len() - 5);
        assert!(matches!(
            read_record(&mut buf.as_slice()),
            Err(SnapshotError::Io(_))
        ));
    }
}
