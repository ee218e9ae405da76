//! Binary encode/decode primitives for the snapshot format.
//!
//! All integers and floats are little-endian, fixed by this codec rather
//! than left to the host so that snapshot files move between machines.
//! The format is intentionally simple: no compression, no alignment
//! padding, no self-describing schema.

use std::io::{Read, Write};

use crate::error::SnapshotError;
use crate::record::{RecordHeader, HEADER};

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f32.
pub fn write_f32_le(w: &mut dyn Write, v: f32) -> Result<(), SnapshotError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a slice of little-endian f32 values.
pub fn write_f32_slice_le(w: &mut dyn Write, vals: &[f32]) -> Result<(), SnapshotError> {
    // One bulk write per component array; the per-element buffer build is
    // cheap next to the reconstruction that produced the values.
    let mut buf = Vec::with_capacity(vals.len() * 4);
    for v in vals {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    w.write_all(&buf)?;
    Ok(())
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, SnapshotError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Read a little-endian f32.
pub fn read_f32_le(r: &mut dyn Read) -> Result<f32, SnapshotError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

/// Read `n` little-endian f32 values.
pub fn read_f32_vec_le(r: &mut dyn Read, n: usize) -> Result<Vec<f32>, SnapshotError> {
    let mut out = Vec::new();
    out.try_reserve_exact(n)
        .map_err(|_| SnapshotError::AllocationFailed)?;
    let mut buf = [0u8; 4];
    for _ in 0..n {
        r.read_exact(&mut buf)?;
        out.push(f32::from_le_bytes(buf));
    }
    Ok(out)
}

/// Encode the magic header and fixed metadata of one record.
pub fn encode_header(w: &mut dyn Write, header: &RecordHeader) -> Result<(), SnapshotError> {
    w.write_all(HEADER)?;
    for e in header.extents {
        write_i32_le(w, e)?;
    }
    write_i32_le(w, header.step)?;
    write_f32_le(w, header.time)?;
    Ok(())
}

/// Decode the magic header and fixed metadata, validating the magic.
pub fn decode_header(r: &mut dyn Read) -> Result<RecordHeader, SnapshotError> {
    let mut magic = [0u8; HEADER.len()];
    r.read_exact(&mut magic)?;
    if &magic != HEADER {
        return Err(SnapshotError::InvalidHeader);
    }
    let extents = [read_i32_le(r)?, read_i32_le(r)?, read_i32_le(r)?];
    let step = read_i32_le(r)?;
    let time = read_f32_le(r)?;
    Ok(RecordHeader {
        extents,
        step,
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trip() {
        let header = RecordHeader {
            extents: [4, 5, 6],
            step: 12,
            time: 1.25,
        };
        let mut buf = Vec::new();
        encode_header(&mut buf, &header).unwrap();
        assert_eq!(buf.len(), HEADER.len() + 4 * 4 + 4);
        assert_eq!(decode_header(&mut buf.as_slice()).unwrap(), header);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"### Murk ###\n\0");
        buf.extend_from_slice(&[0u8; 20]);
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(SnapshotError::InvalidHeader)
        ));
    }

    #[test]
    fn truncated_header_is_an_io_error() {
        let buf = &HEADER[..8];
        assert!(matches!(
            decode_header(&mut &buf[..]),
            Err(SnapshotError::Io(_))
        ));
    }

    #[test]
    fn f32_slice_round_trip() {
        let vals = [1.0f32, -2.5, 0.0, f32::MIN_POSITIVE];
        let mut buf = Vec::new();
        write_f32_slice_le(&mut buf, &vals).unwrap();
        let back = read_f32_vec_le(&mut buf.as_slice(), vals.len()).unwrap();
        assert_eq!(back, vals);
    }
}
